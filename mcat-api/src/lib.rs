//! mcat-api library - Music catalog REST service
//!
//! CRUD endpoints for tracks, labels and users. Every endpoint answers with
//! the uniform `{status, status_code, message, data}` envelope from
//! `mcat_common::api`.

use axum::http::Method;
use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod handlers;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Upper bound for a single persistence call
    pub persistence_timeout: Duration,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, persistence_timeout: Duration) -> Self {
        Self {
            db,
            persistence_timeout,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
///
/// Catalog routes live under [`api::BASE_PATH`]; `/health` sits at the root.
/// Any origin may call the API.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .nest(api::BASE_PATH, api::catalog_routes())
        .merge(api::health_routes())
        .fallback(api::route_not_found)
        .method_not_allowed_fallback(api::method_not_allowed)
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
