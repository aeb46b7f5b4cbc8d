use super::CommandHandler;
use crate::api::AppState;
use crate::config::Config;
use crate::engine::RandomSource;
use crate::server;
use crate::service::DeckService;
use crate::store::{DeckStore, MemoryDeckStore, SqliteDeckStore};
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Handler for the `serve` command
pub struct ServeCommand {
    pub config: Config,
    pub in_memory: bool,
}

impl ServeCommand {
    pub fn new(config: Config, in_memory: bool) -> Self {
        Self { config, in_memory }
    }

    /// Open the configured store
    pub fn open_store(&self) -> Result<Arc<dyn DeckStore>> {
        if self.in_memory {
            tracing::warn!("decks are kept in memory and will be lost on exit");
            return Ok(Arc::new(MemoryDeckStore::new()));
        }

        let store = SqliteDeckStore::open(
            &self.config.db.path,
            Duration::from_millis(self.config.db.busy_timeout_ms),
        )?;
        Ok(Arc::new(store))
    }

    pub fn build_state(&self) -> Result<AppState> {
        let service = DeckService::new(self.open_store()?, RandomSource::entropy());
        Ok(AppState::new(service))
    }
}

#[async_trait]
impl CommandHandler for ServeCommand {
    async fn execute(&self) -> Result<()> {
        let state = self.build_state()?;
        let listener = server::bind(&self.config.bind_addr()).await?;

        server::serve(
            listener,
            state,
            server::shutdown_signal(),
            Duration::from_secs(self.config.app.shutdown_timeout_secs),
        )
        .await
    }

    fn name(&self) -> &'static str {
        "serve"
    }
}
