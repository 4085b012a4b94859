//! Track routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Router,
};
use mcat_common::api::{Listing, Outcome};

use super::content_type;
use crate::db::Track;
use crate::handlers::track;
use crate::AppState;

/// POST /musica
pub async fn create_track(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<Track> {
    track::create(&state, content_type(&headers), &body).await
}

/// GET /musica
pub async fn list_tracks(State(state): State<AppState>) -> Outcome<Listing<Track>> {
    track::list(&state).await
}

/// GET /musica-id/:id
pub async fn get_track(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<Track> {
    track::get(&state, &id).await
}

/// PUT /atualizar/:id
pub async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<Track> {
    track::update(&state, &id, content_type(&headers), &body).await
}

/// DELETE /deletar-musica/:id
pub async fn delete_track(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<()> {
    track::delete(&state, &id).await
}

/// Build track routes
pub fn track_routes() -> Router<AppState> {
    Router::new()
        .route("/musica", post(create_track).get(list_tracks))
        .route("/musica-id/:id", get(get_track))
        .route("/atualizar/:id", put(update_track))
        .route("/deletar-musica/:id", delete(delete_track))
}
