//! Label routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Router,
};
use mcat_common::api::{Listing, Outcome};

use super::content_type;
use crate::db::Label;
use crate::handlers::label;
use crate::AppState;

/// POST /gravadora
pub async fn create_label(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<Label> {
    label::create(&state, content_type(&headers), &body).await
}

/// GET /gravadoras
pub async fn list_labels(State(state): State<AppState>) -> Outcome<Listing<Label>> {
    label::list(&state).await
}

/// GET /gravadora-id/:id
pub async fn get_label(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<Label> {
    label::get(&state, &id).await
}

/// PUT /atualizar-gravadora/:id
pub async fn update_label(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<Label> {
    label::update(&state, &id, content_type(&headers), &body).await
}

/// DELETE /deletar-gravadora/:id
pub async fn delete_label(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<()> {
    label::delete(&state, &id).await
}

/// Build label routes
///
/// The list route is plural (`/gravadoras`) while create is singular.
pub fn label_routes() -> Router<AppState> {
    Router::new()
        .route("/gravadora", post(create_label))
        .route("/gravadoras", get(list_labels))
        .route("/gravadora-id/:id", get(get_label))
        .route("/atualizar-gravadora/:id", put(update_label))
        .route("/deletar-gravadora/:id", delete(delete_label))
}
