//! Switcher - multi-account switcher with a cookie-backed roster
//!
//! Main entry point for the Switcher CLI.

mod cli;
mod host;
mod json_view;
mod logging;
mod shell;

use clap::Parser;
use tracing::{info, warn};

use switcher_config::{ConfigLoader, ConfigValidator};

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    if let Some(jar) = cli.jar {
        config.jar.backend = "file".to_string();
        config.jar.path = jar;
    }
    let warnings = ConfigValidator::validate(&config).into_result()?;

    logging::init_tracing(&config.logging)?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    info!("Starting Switcher v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        None | Some(Commands::Shell) => host::run_shell(&config),
        Some(Commands::Add { username, password }) => host::run_add(&config, username, password),
        Some(Commands::List) => host::run_list(&config),
        Some(Commands::Render { format }) => host::run_render(&config, format.as_deref()),
    }
}
