//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use screenmind_core::config;
use screenmind_core::dashboard::Tab;
use screenmind_core::interrupt;

mod commands;

#[derive(Parser)]
#[command(name = "screenmind")]
#[command(version)]
#[command(about = "Mental health & digital wellness dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the simulated sign-in delay (milliseconds)
    #[arg(long, value_name = "MS", env = "SCREENMIND_LOGIN_DELAY_MS")]
    login_delay_ms: Option<u64>,

    /// Tab to open after signing in (usage, sleep, social, mobility)
    #[arg(long, value_name = "TAB")]
    tab: Option<Tab>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the default config file
    Init,
    /// Print the default config as TOML
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init()?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        login_delay_ms,
        tab,
    } = cli;

    match command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
        None => {
            let mut config = config::Config::load().context("load config")?;
            if let Some(ms) = login_delay_ms {
                config.login_delay_ms = ms;
            }
            if let Some(tab) = tab {
                config.default_tab = tab;
            }
            commands::tui::run(&config).await
        }
    }
}
