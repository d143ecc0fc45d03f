//! CLI definitions for Switcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Switcher CLI.
#[derive(Parser)]
#[command(name = "switcher")]
#[command(about = "Multi-account switcher with cookie-backed roster")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Cookie jar file (implies the file backend)
    #[arg(long, env = "SWITCHER_JAR", global = true)]
    pub jar: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive page session (default)
    Shell,

    /// Register an account and exit
    Add {
        /// Username
        username: String,

        /// Password (stored as given)
        password: String,
    },

    /// Print the persisted roster
    List,

    /// Render the widget once and exit
    Render {
        /// Output format, overrides view.format
        #[arg(long, value_parser = ["text", "html", "json"])]
        format: Option<String>,
    },
}
