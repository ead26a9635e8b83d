use std::sync::Arc;

use database::{DatabaseConfig, LeaderboardStore, SqliteLeaderboard};

use crate::error::ApiError;

pub struct AppState {
    store: Option<Arc<dyn LeaderboardStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn LeaderboardStore>) -> Arc<Self> {
        Arc::new(Self { store: Some(store) })
    }

    /// A state whose every request fails with "Database not configured".
    pub fn without_store() -> Arc<Self> {
        Arc::new(Self { store: None })
    }

    /// Opens the configured database. If it stays unreachable the server
    /// still starts and answers with server errors.
    pub async fn connect(config: &DatabaseConfig) -> Arc<Self> {
        match SqliteLeaderboard::connect(config).await {
            Ok(store) => Self::new(Arc::new(store)),
            Err(e) => {
                tracing::error!("Could not open leaderboard database {}: {e}", config.url);
                Self::without_store()
            }
        }
    }

    pub fn store(&self) -> Result<&dyn LeaderboardStore, ApiError> {
        self.store.as_deref().ok_or(ApiError::StoreUnavailable)
    }
}
