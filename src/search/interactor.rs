use std::sync::Arc;

use async_trait::async_trait;

use crate::contracts::UseCase;
use crate::data::{Item, SearchRepository};
use crate::search::SearchFailure;

/// The use case a search presenter drives.
pub type SearchUseCase = dyn UseCase<Input = String, Output = Vec<Item>, Failure = SearchFailure>;

/// Searches the repository by keyword and turns transport errors into
/// [`SearchFailure`]s.
pub struct SearchInteractor {
    repository: Arc<dyn SearchRepository>,
}

impl SearchInteractor {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for SearchInteractor {
    type Input = String;
    type Output = Vec<Item>;
    type Failure = SearchFailure;

    async fn execute(&self, keyword: String) -> Result<Vec<Item>, SearchFailure> {
        match self.repository.search(&keyword).await {
            Ok(items) => {
                tracing::debug!(%keyword, count = items.len(), "search succeeded");
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(%keyword, error = %err, "search failed");
                Err(SearchFailure::from(err))
            }
        }
    }
}
