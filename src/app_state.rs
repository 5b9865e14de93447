/// Application state
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServiceConfig;
use crate::errors::ApiError;
use crate::parser::DraftParser;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub service_config: ServiceConfig,
    pub postgres: Option<PgPool>,
    pub parser: Arc<DraftParser>,
}

impl AppState {
    pub fn new(
        service_config: ServiceConfig,
        postgres: Option<PgPool>,
        parser: Arc<DraftParser>,
    ) -> Self {
        Self {
            service_config,
            postgres,
            parser,
        }
    }

    /// Store facade over the connection pool, or 503 when the database is down
    pub fn store(&self) -> Result<DocumentStore, ApiError> {
        let pool = self
            .postgres
            .as_ref()
            .ok_or_else(|| ApiError::ServiceUnavailable {
                details: "Database not available".to_string(),
            })?;
        Ok(DocumentStore::new(pool.clone()))
    }
}
