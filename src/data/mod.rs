//! Data-access collaborators consumed by interactors.

mod error;
mod fixture;
mod github;
mod item;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;

pub use error::TransportError;
pub use fixture::FixtureRepository;
pub use github::GithubClient;
pub use item::Item;

/// Keyword search over some item source.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<Item>, TransportError>;
}

/// Repository selected by the configuration: the fixture file when one is
/// set, the remote API otherwise.
pub fn repository_from_config(config: &Config) -> Result<Arc<dyn SearchRepository>, TransportError> {
    match &config.search.fixture {
        Some(path) => Ok(Arc::new(FixtureRepository::from_path(path)?)),
        None => {
            let client = GithubClient::new(&config.api)?;
            tracing::info!(base_url = %config.api.base_url, "serving search from api");
            Ok(Arc::new(client))
        }
    }
}
