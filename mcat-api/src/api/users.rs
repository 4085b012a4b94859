//! User routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Router,
};
use mcat_common::api::{Listing, Outcome};

use super::content_type;
use crate::db::User;
use crate::handlers::user;
use crate::AppState;

/// POST /usuario
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<User> {
    user::create(&state, content_type(&headers), &body).await
}

/// GET /usuarios
pub async fn list_users(State(state): State<AppState>) -> Outcome<Listing<User>> {
    user::list(&state).await
}

/// GET /usuario-id/:id
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<User> {
    user::get(&state, &id).await
}

/// PUT /atualizar-usuario/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome<User> {
    user::update(&state, &id, content_type(&headers), &body).await
}

/// DELETE /deletar-usuario/:id
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Outcome<()> {
    user::delete(&state, &id).await
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/usuario", post(create_user))
        .route("/usuarios", get(list_users))
        .route("/usuario-id/:id", get(get_user))
        .route("/atualizar-usuario/:id", put(update_user))
        .route("/deletar-usuario/:id", delete(delete_user))
}
