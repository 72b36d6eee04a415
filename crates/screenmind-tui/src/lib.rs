//! Full-screen TUI for ScreenMind: login screen and the tabbed home screen.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use runtime::TuiRuntime;
use screenmind_core::auth::SimulatedAuthenticator;
use screenmind_core::config::Config;
use screenmind_core::dashboard::stub_providers;

/// Runs the interactive app until the user quits.
pub async fn run_interactive(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("ScreenMind requires a terminal.");
    }

    let providers = stub_providers();
    let authenticator = Arc::new(SimulatedAuthenticator::new(config.login_delay()));
    tracing::info!(
        login_delay_ms = config.login_delay_ms,
        default_tab = %config.default_tab,
        "starting tui"
    );

    let mut runtime = TuiRuntime::new(config.clone(), &providers, authenticator)?;
    runtime.run()?;
    tracing::info!(route = runtime.state.nav.current().name(), "tui exited");
    Ok(())
}
