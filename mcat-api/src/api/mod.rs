//! HTTP API for mcat-api
//!
//! Thin axum glue: each route pulls the path id, content type and raw body
//! out of the request, hands them to the matching handler unmodified and
//! writes the returned outcome back as the response.

pub mod health;
pub mod labels;
pub mod tracks;
pub mod users;

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Router,
};
use mcat_common::api::catalog::{METHOD_NOT_ALLOWED_ERROR, NOT_FOUND_ERROR};
use mcat_common::api::{Origin, Outcome};
use std::any::Any;

use crate::AppState;

pub use health::health_routes;
pub use labels::label_routes;
pub use tracks::track_routes;
pub use users::user_routes;

/// Prefix shared by every catalog route
pub const BASE_PATH: &str = "/v1/controle-musicas";

/// All entity routes, relative to [`BASE_PATH`]
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(track_routes())
        .merge(label_routes())
        .merge(user_routes())
}

/// Declared content type, if the header is present and readable
pub(crate) fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
}

/// Unknown routes still answer with the envelope
pub async fn route_not_found() -> Outcome<()> {
    NOT_FOUND_ERROR.outcome()
}

/// Known path, unserved method
pub async fn method_not_allowed() -> Outcome<()> {
    METHOD_NOT_ALLOWED_ERROR.outcome()
}

/// A panicking handler becomes INTERNAL_ERROR instead of a dropped connection
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    Outcome::<()>::internal(Origin::Handler, detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["status_code"], 500);
    }

    #[test]
    fn test_content_type_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_type(&headers), None);

        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        assert_eq!(content_type(&headers), Some("application/json"));
    }
}
