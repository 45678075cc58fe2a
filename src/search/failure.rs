use thiserror::Error;

use crate::data::TransportError;

/// Domain failure of the search use case, shown to the user as an alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("Could not connect to the server")]
    ConnectionError,

    #[error("The server took too long to respond")]
    Timeout,

    #[error("Search limit reached")]
    RateLimited,

    #[error("The server returned an error (status {status})")]
    ServerError { status: u16 },

    #[error("The search results could not be read")]
    InvalidResponse,

    #[error("Local search data is unavailable")]
    SourceUnavailable,
}

impl SearchFailure {
    /// Alert body text.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Alert hint telling the user what to try next.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchFailure::ConnectionError => "Check your network connection and refresh.",
            SearchFailure::Timeout => "Try again in a moment.",
            SearchFailure::RateLimited => "Wait a minute before searching again.",
            SearchFailure::ServerError { .. } => "Try a different keyword or refresh later.",
            SearchFailure::InvalidResponse => "Refresh to try again.",
            SearchFailure::SourceUnavailable => "Check the fixture path in your configuration.",
        }
    }
}

impl From<TransportError> for SearchFailure {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connection(_) => SearchFailure::ConnectionError,
            TransportError::Timeout => SearchFailure::Timeout,
            TransportError::Status { status: 403 | 429, .. } => SearchFailure::RateLimited,
            TransportError::Status { status, .. } => SearchFailure::ServerError { status },
            TransportError::Decode(_) | TransportError::InvalidRequest(_) => {
                SearchFailure::InvalidResponse
            }
            TransportError::Fixture { .. } => SearchFailure::SourceUnavailable,
        }
    }
}
