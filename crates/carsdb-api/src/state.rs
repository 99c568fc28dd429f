//! # Application State
//!
//! Configuration read from the environment and the shared state passed
//! to route handlers via the `State` extractor. The car store handle is
//! constructed in `main` and injected here, with no module-level global
//! connection state.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::db::CarStore;

/// Port the HTTP server listens on. Fixed, not configurable.
pub const PORT: u16 = 3000;

const ENV_HOSTNAME: &str = "MONGO_DB_HOSTNAME";
const ENV_PORT: &str = "MONGO_DB_PORT";
const ENV_DB: &str = "MONGO_DB";

/// A required environment value is absent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Application configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_hostname: String,
    pub mongo_port: String,
    pub mongo_db: String,
    /// Root directory for the landing page and static assets.
    pub static_root: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Fails fast on any missing value instead of silently assembling a
    /// malformed connection target.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mongo_hostname: require(ENV_HOSTNAME)?,
            mongo_port: require(ENV_PORT)?,
            mongo_db: require(ENV_DB)?,
            static_root: PathBuf::from("."),
        })
    }

    /// MongoDB connection URI for the configured target.
    pub fn connection_uri(&self) -> String {
        format!(
            "mongodb://{}:{}/{}",
            self.mongo_hostname, self.mongo_port, self.mongo_db
        )
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Shared state for the Axum application.
///
/// Holds only the configuration and the injected store handle. No record
/// data is cached between requests; every handler goes through the store.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cars: Arc<dyn CarStore>,
}

impl AppState {
    /// Build the application state around an injected car store.
    pub fn new(config: AppConfig, cars: Arc<dyn CarStore>) -> Self {
        Self {
            config: Arc::new(config),
            cars,
        }
    }
}
