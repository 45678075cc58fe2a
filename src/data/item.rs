use serde::{Deserialize, Serialize};

/// A search result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: None,
            url: None,
            stars: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Case-insensitive match against title and summary.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .summary
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_item_deserializes() {
        let item: Item = serde_json::from_str(r#"{"id":"a1","title":"t1"}"#).unwrap();
        assert_eq!(item, Item::new("a1", "t1"));
    }

    #[test]
    fn matches_title_and_summary_ignoring_case() {
        let item = Item::new("1", "tokio-rs/Tokio").with_summary("Async runtime");
        assert!(item.matches("TOKIO"));
        assert!(item.matches("runtime"));
        assert!(!item.matches("serde"));
    }
}
