use std::{fs::read_to_string, path::PathBuf};

use clap::Parser;
use database::DatabaseConfig;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8787;

#[derive(Parser, Debug, Default)]
#[command(name = "leaderboard-server", about = "Serves the trivia leaderboard API")]
pub struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "LEADERBOARD_HOST")]
    pub host: Option<String>,

    #[arg(short, long, env = "LEADERBOARD_PORT")]
    pub port: Option<u16>,

    /// SQLite URL; falls back to DATABASE_URL, then the config file
    #[arg(long)]
    pub database_url: Option<String>,

    /// YAML file with any of: host, port, database_url, pool_size
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub pool_size: Option<u32>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl FileConfig {
    pub fn load(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }
}

impl ServerConfig {
    /// Command line and environment first, then the YAML file, then defaults.
    pub fn load(args: ServerArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let database = DatabaseConfig::from_cli_or_env_or_yaml(
            args.database_url.clone(),
            file.database_url.clone(),
        );
        Ok(Self::from_parts(args, file, database))
    }

    pub fn from_parts(args: ServerArgs, file: FileConfig, mut database: DatabaseConfig) -> Self {
        if let Some(pool_size) = file.pool_size {
            database.pool_size = pool_size;
        }
        Self {
            host: args
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
