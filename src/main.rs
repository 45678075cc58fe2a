use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use rxviper::cli::Cli;
use rxviper::config::Config;
use rxviper::data::repository_from_config;
use rxviper::logging::init_tracing;
use rxviper::search::SearchInteractor;
use rxviper::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line override")?;

    init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(
        config = %config_path.display(),
        keyword = %config.search.default_keyword,
        view = config.ui.view.label(),
        "starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let _entered = runtime.enter();
    let repository = repository_from_config(&config).context("failed to set up search source")?;
    let interactor = Arc::new(SearchInteractor::new(repository));

    ui::runtime::run(&config, runtime.handle().clone(), interactor)
        .context("terminal UI failed")?;

    tracing::info!("exiting");
    Ok(())
}
