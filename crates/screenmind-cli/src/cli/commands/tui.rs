//! Default command: the interactive app.

use anyhow::{Context, Result};
use screenmind_core::config::{Config, paths};
use screenmind_core::logging;

pub async fn run(config: &Config) -> Result<()> {
    // Dropping the guard flushes the log file, keep it until exit.
    let _log_guard = logging::init(config).context("init logging")?;
    tracing::info!(config = %paths::config_path().display(), "screenmind starting");

    let result = screenmind_tui::run_interactive(config).await;
    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}
