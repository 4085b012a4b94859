//! Uniform response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt::Display;
use tracing::error;

use super::catalog::{Template, INTERNAL_ERROR};

/// Result object returned by every handler
///
/// Serialized as `{status, status_code, message, data?}`; `data` is left out
/// when there is no payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub status: bool,
    pub status_code: u16,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Layer an internal fault came from. Logged, never shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Persistence,
    Handler,
}

/// Payload for list operations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    /// Number of records returned
    pub items: usize,
    pub records: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            items: records.len(),
            records,
        }
    }
}

impl<T> Outcome<T> {
    pub fn from_template(template: Template) -> Self {
        Self {
            status: template.status,
            status_code: template.status_code,
            message: template.message,
            data: None,
        }
    }

    /// Attach a payload
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// INTERNAL_ERROR outcome, logging where the fault happened
    pub fn internal(origin: Origin, cause: impl Display) -> Self {
        error!(?origin, "Request failed: {}", cause);
        Self::from_template(INTERNAL_ERROR)
    }

    pub fn is_success(&self) -> bool {
        self.status
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::catalog::{CREATED, NOT_FOUND_ERROR};
    use serde_json::json;

    #[test]
    fn test_serialization_omits_missing_data() {
        let outcome: Outcome<()> = NOT_FOUND_ERROR.outcome();
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            value,
            json!({
                "status": false,
                "status_code": 404,
                "message": NOT_FOUND_ERROR.message,
            })
        );
    }

    #[test]
    fn test_serialization_with_data() {
        let outcome = CREATED.with_data(json!({"id": 7}));
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["status"], true);
        assert_eq!(value["status_code"], 201);
        assert_eq!(value["data"]["id"], 7);
    }

    #[test]
    fn test_internal_hides_origin_from_client() {
        let from_db: Outcome<()> = Outcome::internal(Origin::Persistence, "disk full");
        let from_handler: Outcome<()> = Outcome::internal(Origin::Handler, "bad state");

        assert_eq!(from_db, from_handler);
        assert_eq!(from_db.status_code, 500);
        assert!(!from_db.is_success());
    }

    #[test]
    fn test_listing_counts_records() {
        let listing = Listing::new(vec!["a", "b", "c"]);
        assert_eq!(listing.items, 3);
    }

    #[tokio::test]
    async fn test_into_response_uses_status_code() {
        let response = NOT_FOUND_ERROR.outcome::<()>().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status_code"], 404);
    }
}
