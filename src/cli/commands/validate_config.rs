use super::CommandHandler;
use crate::config::Config;
use crate::Result;
use async_trait::async_trait;

/// Handler for the `validate-config` command.
///
/// The file was already loaded and validated by the time this runs; the
/// command only prints the effective settings, defaults included.
pub struct ValidateConfigCommand {
    pub config: Config,
}

impl ValidateConfigCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn render(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(&self.config)?)
    }
}

#[async_trait]
impl CommandHandler for ValidateConfigCommand {
    async fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "validate-config"
    }
}
