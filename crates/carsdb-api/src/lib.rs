//! # carsdb-api — Axum REST API over the `carsdb` MongoDB collection
//!
//! Five CRUD endpoints over a single `cars` collection, plus a static
//! landing page. Each handler performs exactly one store operation
//! through the injected [`db::CarStore`] handle and serializes the
//! result.
//!
//! ## API Surface
//!
//! | Method   | Path        | Handler                      |
//! |----------|-------------|------------------------------|
//! | `GET`    | `/cars`     | [`routes::cars`] list        |
//! | `GET`    | `/cars/:id` | [`routes::cars`] get by id   |
//! | `POST`   | `/cars`     | [`routes::cars`] create      |
//! | `PUT`    | `/cars/:id` | [`routes::cars`] replace     |
//! | `DELETE` | `/cars/:id` | [`routes::cars`] delete      |
//! | `GET`    | `/`         | static landing page          |
//!
//! Unmatched paths fall back to static file service rooted at the
//! application root directory.

pub mod db;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router.
///
/// The car CRUD routes take precedence; everything else is served from
/// the static root, with `/` pinned to the landing page.
pub fn app(state: AppState) -> Router {
    let static_root = state.config.static_root.clone();
    let landing = ServeFile::new(static_root.join("public.html"));

    Router::new()
        .merge(routes::cars::router())
        .route_service("/", landing)
        .fallback_service(ServeDir::new(static_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
