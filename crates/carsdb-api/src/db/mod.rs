//! # Data Store Connector
//!
//! Opens the long-lived MongoDB connection used by the car record model.
//! The connection target is assembled from three required environment
//! values (see [`crate::state::AppConfig`]); the database and collection
//! names are fixed.
//!
//! The client is constructed once at process start, verified with a
//! `ping`, injected into [`crate::state::AppState`], and shut down
//! gracefully after the server stops. No retries, no request timeouts,
//! no pooling configuration beyond driver defaults.

pub mod cars;

pub use cars::{Car, CarFields, CarStore, MongoCarStore};

use mongodb::bson::doc;
use mongodb::Client;
use thiserror::Error;

/// Fixed database name.
pub const DB_NAME: &str = "carsdb";

/// Fixed collection name.
pub const COLLECTION_NAME: &str = "cars";

/// Store-level failure surfaced by [`CarStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Connect to MongoDB and verify the connection with a `ping`.
///
/// A failure here aborts startup rather than leaving the process
/// running against an unreachable store.
pub async fn connect(uri: &str) -> Result<Client, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    if let Err(e) = client.database(DB_NAME).run_command(doc! { "ping": 1 }).await {
        tracing::error!(error = %e, "Помилка підключення до MongoDB");
        return Err(e.into());
    }
    tracing::info!("Підключено до MongoDB");
    Ok(client)
}
