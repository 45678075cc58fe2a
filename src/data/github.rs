//! Repository search against the GitHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::data::{Item, SearchRepository, TransportError};

const SEARCH_PATH: &str = "search/repositories";

/// Longest error body kept in a [`TransportError::Status`] message.
const MAX_ERROR_BODY: usize = 200;

pub struct GithubClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<GithubRepository>,
}

#[derive(Debug, Deserialize)]
struct GithubRepository {
    id: u64,
    full_name: String,
    #[serde(default)]
    description: Option<String>,
    html_url: String,
    #[serde(default)]
    stargazers_count: u64,
}

impl From<GithubRepository> for Item {
    fn from(repo: GithubRepository) -> Self {
        let item = Item::new(repo.id.to_string(), repo.full_name)
            .with_url(repo.html_url)
            .with_stars(repo.stargazers_count);
        match repo.description {
            Some(description) => item.with_summary(description),
            None => item,
        }
    }
}

impl GithubClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| TransportError::Connection(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    fn search_url(&self, keyword: &str) -> Result<Url, TransportError> {
        let per_page = self.per_page.to_string();
        Url::parse_with_params(
            &format!("{}/{}", self.base_url, SEARCH_PATH),
            &[("q", keyword), ("per_page", per_page.as_str())],
        )
        .map_err(|err| TransportError::InvalidRequest(err.to_string()))
    }
}

#[async_trait]
impl SearchRepository for GithubClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Item>, TransportError> {
        let url = self.search_url(keyword)?;
        tracing::debug!(%url, "searching repositories");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.items.into_iter().map(Item::from).collect())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
