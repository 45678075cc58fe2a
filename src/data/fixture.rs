//! Offline repository backed by a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::data::{Item, SearchRepository, TransportError};

/// Serves searches from a fixed list of items.
///
/// The fixture file is a JSON array of items. An empty keyword matches
/// everything.
pub struct FixtureRepository {
    items: Vec<Item>,
    source: Option<PathBuf>,
}

impl FixtureRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            source: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, TransportError> {
        let content = fs::read_to_string(path).map_err(|source| TransportError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<Item> = serde_json::from_str(&content)
            .map_err(|err| TransportError::Decode(format!("{}: {}", path.display(), err)))?;

        tracing::info!(path = %path.display(), items = items.len(), "fixture loaded");
        Ok(Self {
            items,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl SearchRepository for FixtureRepository {
    async fn search(&self, keyword: &str) -> Result<Vec<Item>, TransportError> {
        let keyword = keyword.trim();
        Ok(self
            .items
            .iter()
            .filter(|item| keyword.is_empty() || item.matches(keyword))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn repository() -> FixtureRepository {
        FixtureRepository::new(vec![
            Item::new("1", "tokio-rs/tokio").with_summary("async runtime"),
            Item::new("2", "serde-rs/serde"),
            Item::new("3", "ratatui/ratatui").with_summary("terminal UI"),
        ])
    }

    #[tokio::test]
    async fn search_filters_by_keyword() {
        let found = repository().search("serde").await.unwrap();
        assert_eq!(found, vec![Item::new("2", "serde-rs/serde")]);
    }

    #[tokio::test]
    async fn empty_keyword_returns_everything() {
        assert_eq!(repository().search("  ").await.unwrap().len(), 3);
    }

    #[test]
    fn loads_items_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"a1","title":"t1"}},{{"id":"a2","title":"t2"}}]"#).unwrap();

        let repo = FixtureRepository::from_path(file.path()).unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.source(), Some(file.path()));
    }

    #[test]
    fn missing_file_is_a_fixture_error() {
        let err = FixtureRepository::from_path(Path::new("/nonexistent/items.json"))
            .err()
            .unwrap();
        assert!(matches!(err, TransportError::Fixture { .. }));
    }

    #[test]
    fn malformed_file_is_a_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = FixtureRepository::from_path(file.path()).err().unwrap();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
