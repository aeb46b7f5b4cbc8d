use anyhow::{Context, Result};
use card_deck::cli::commands::{
    codes::CodesCommand, serve::ServeCommand, validate_config::ValidateConfigCommand,
    CommandHandler,
};
use card_deck::cli::{Cli, Commands};
use card_deck::config::{Config, ConfigLoader};
use card_deck::telemetry;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command.config_path() {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    telemetry::initialize_tracing(&config.app, cli.log_level);

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Serve { in_memory, .. } => Box::new(ServeCommand::new(config, in_memory)),
        Commands::ValidateConfig { .. } => Box::new(ValidateConfigCommand::new(config)),
        Commands::Codes { shuffled } => Box::new(CodesCommand::new(shuffled)),
    };

    tracing::debug!(command = handler.name(), "running command");
    handler
        .execute()
        .await
        .with_context(|| format!("{} failed", handler.name()))?;

    Ok(())
}
