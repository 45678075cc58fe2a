//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ViewKind};

#[derive(Debug, Parser)]
#[command(
    name = "rxviper",
    version,
    about = "Reactive search screen in the terminal"
)]
pub struct Cli {
    /// Config file (default: ~/.config/rxviper/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keyword for the initial search
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// View variant rendering the search screen
    #[arg(long, value_enum)]
    pub view: Option<ViewKind>,

    /// Serve results from a JSON fixture instead of the API
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(keyword) = &self.keyword {
            config.search.default_keyword = keyword.clone();
        }
        if let Some(view) = self.view {
            config.ui.view = view;
        }
        if let Some(fixture) = &self.fixture {
            config.search.fixture = Some(fixture.clone());
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["rxviper"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::parse_from([
            "rxviper",
            "-k",
            "tokio",
            "--view",
            "reactive",
            "--fixture",
            "items.json",
            "--log-level",
            "debug",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.search.default_keyword, "tokio");
        assert_eq!(config.ui.view, ViewKind::Reactive);
        assert_eq!(config.search.fixture, Some(PathBuf::from("items.json")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["rxviper", "--view", "grid"]).is_err());
    }
}
