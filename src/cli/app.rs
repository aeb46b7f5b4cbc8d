use crate::config::{LogLevel, DEFAULT_CONFIG_PATH};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// card-deck: a standard 52-card deck over HTTP
#[derive(Parser, Debug)]
#[command(name = "card-deck")]
#[command(version)]
#[command(about = "HTTP service simulating a standard 52-card deck")]
#[command(
    long_about = "Create decks (optionally shuffled or from a custom subset of cards), open them and draw cards. Decks are persisted in SQLite."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the log level from the configuration file
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Keep decks in memory instead of the configured database
        #[arg(long)]
        in_memory: bool,
    },

    /// Load and validate a configuration file, then print the effective settings
    ValidateConfig {
        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Print the 52 default card codes
    Codes {
        /// Print a shuffled copy instead of the default order
        #[arg(short, long)]
        shuffled: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Serve { .. } => "serve",
            Commands::ValidateConfig { .. } => "validate-config",
            Commands::Codes { .. } => "codes",
        }
    }

    /// Configuration file this command reads, if any
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Serve { config, .. } | Commands::ValidateConfig { config } => Some(config),
            Commands::Codes { .. } => None,
        }
    }
}
