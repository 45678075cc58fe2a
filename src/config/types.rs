use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keyword used for the initial load and for refreshes until the user
    /// submits a different one.
    #[serde(default = "default_keyword")]
    pub default_keyword: String,
    /// Serve results from a JSON file instead of the API.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

/// Remote search API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://api.github.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Results per search, 1..=100 (default: 30).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Which view variant renders the search screen.
    #[serde(default)]
    pub view: ViewKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (e.g., "info", "rxviper=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Without one, no subscriber is installed since the terminal
    /// UI owns stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Rendering strategy of the search screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Imperative list that diffs old and new rows.
    #[default]
    List,
    /// Declarative view re-rendered from a reduced view model.
    Reactive,
}

impl ViewKind {
    pub fn toggled(self) -> Self {
        match self {
            ViewKind::List => ViewKind::Reactive,
            ViewKind::Reactive => ViewKind::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::List => "list",
            ViewKind::Reactive => "reactive",
        }
    }
}

fn default_keyword() -> String {
    "rust".to_string()
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_per_page() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("rxviper/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_keyword: default_keyword(),
            fixture: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            view: ViewKind::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
