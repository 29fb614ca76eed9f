use anyhow::Result;
use std::sync::Arc;
use transporte_identification_types::IdentificationTypeService;
use transporte_storage::SqliteIdentificationTypeStore;

use crate::config::Config;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Direct store access (readiness probe, test seeding)
    pub store: Arc<SqliteIdentificationTypeStore>,
    pub identification_types: IdentificationTypeService<SqliteIdentificationTypeStore>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        // Initialize storage
        let store = Arc::new(SqliteIdentificationTypeStore::connect(&config.database_url).await?);

        // Initialize services
        let identification_types = IdentificationTypeService::new(store.clone());

        Ok(AppState {
            config,
            store,
            identification_types,
        })
    }
}
