//! Interactor over real and failing repositories.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use rxviper::config::Config;
use rxviper::contracts::UseCase;
use rxviper::data::{repository_from_config, FixtureRepository, Item, SearchRepository, TransportError};
use rxviper::search::{SearchFailure, SearchInteractor};

struct FailingRepository {
    error: fn() -> TransportError,
}

#[async_trait]
impl SearchRepository for FailingRepository {
    async fn search(&self, _keyword: &str) -> Result<Vec<Item>, TransportError> {
        Err((self.error)())
    }
}

fn failing(error: fn() -> TransportError) -> SearchInteractor {
    SearchInteractor::new(Arc::new(FailingRepository { error }))
}

fn case(
    error: fn() -> TransportError,
    expected: SearchFailure,
) -> (fn() -> TransportError, SearchFailure) {
    (error, expected)
}

fn fixture() -> FixtureRepository {
    FixtureRepository::new(vec![
        Item::new("1", "tokio-rs/tokio").with_summary("async runtime"),
        Item::new("2", "serde-rs/serde"),
        Item::new("3", "ratatui/ratatui").with_summary("Terminal UI"),
    ])
}

#[tokio::test]
async fn fixture_search_filters_by_keyword() {
    let interactor = SearchInteractor::new(Arc::new(fixture()));

    let found = interactor.execute("terminal".to_string()).await.unwrap();
    let ids: Vec<_> = found.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);

    let none = interactor.execute("nothing".to_string()).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn transport_errors_become_search_failures() {
    let cases = [
        case(
            || TransportError::Connection("refused".into()),
            SearchFailure::ConnectionError,
        ),
        case(|| TransportError::Timeout, SearchFailure::Timeout),
        case(
            || TransportError::Status {
                status: 429,
                message: "slow down".into(),
            },
            SearchFailure::RateLimited,
        ),
        case(
            || TransportError::Status {
                status: 502,
                message: "bad gateway".into(),
            },
            SearchFailure::ServerError { status: 502 },
        ),
        case(
            || TransportError::Decode("eof".into()),
            SearchFailure::InvalidResponse,
        ),
    ];

    for (error, expected) in cases {
        let result = failing(error).execute("rust".to_string()).await;
        assert_eq!(result, Err(expected));
    }
}

#[tokio::test]
async fn config_with_fixture_serves_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id":"a1","title":"t1"}},{{"id":"b2","title":"other","summary":"mentions t1"}}]"#
    )
    .unwrap();

    let mut config = Config::default();
    config.search.fixture = Some(file.path().to_path_buf());

    let repository = repository_from_config(&config).unwrap();
    let items = repository.search("t1").await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Item::new("a1", "t1"));
}

#[test]
fn missing_fixture_fails_setup() {
    let mut config = Config::default();
    config.search.fixture = Some("/nonexistent/rxviper/items.json".into());

    match repository_from_config(&config) {
        Err(TransportError::Fixture { .. }) => {}
        Err(other) => panic!("Expected Fixture error, got {other}"),
        Ok(_) => panic!("Expected Fixture error"),
    }
    assert_eq!(
        SearchFailure::from(TransportError::Fixture {
            path: "/x".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
        SearchFailure::SourceUnavailable
    );
}

#[tokio::test]
async fn config_without_fixture_uses_api_client() {
    let mut config = Config::default();
    config.api.base_url = "http://127.0.0.1:9".to_string();

    assert!(repository_from_config(&config).is_ok());
}
