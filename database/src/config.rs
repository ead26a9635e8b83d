use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::DatabaseError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://leaderboard.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: 8,
        }
    }

    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        Self::from_sources(cli_arg, std::env::var("DATABASE_URL").ok(), yaml_config)
    }

    /// First of `cli_arg`, `env`, `yaml_config` that is set wins.
    pub fn from_sources(
        cli_arg: Option<String>,
        env: Option<String>,
        yaml_config: Option<String>,
    ) -> Self {
        let url = cli_arg
            .or(env)
            .or(yaml_config)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Self::new(url)
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    pub async fn create_pool(&self) -> Result<SqlitePool, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&self.url)
            .map_err(|e| DatabaseError::Connection(format!("{}: {e}", self.url)))?
            .create_if_missing(true);

        // every connection to a private in-memory database sees its own empty
        // database, so those get exactly one connection that never expires
        let pool = if self.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await
        } else {
            SqlitePoolOptions::new()
                .max_connections(self.pool_size)
                .connect_with(options.journal_mode(SqliteJournalMode::Wal))
                .await
        };

        pool.map_err(|e| DatabaseError::Connection(format!("{}: {e}", self.url)))
    }
}
