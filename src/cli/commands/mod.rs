pub mod codes;
pub mod serve;
pub mod validate_config;

use crate::Result;
use async_trait::async_trait;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
