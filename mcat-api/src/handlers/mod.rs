//! Entity handlers
//!
//! One module per entity. Each operation takes already-extracted request
//! parts (path id, declared content type, raw body), calls the persistence
//! layer and returns exactly one [`Outcome`]. Nothing propagates past a
//! handler: every failure becomes an outcome built from the catalog.
//!
//! Write operations check, in order: content type, identifier (update
//! only), body shape and required fields.

pub mod label;
pub mod track;
pub mod user;

use mcat_common::api::catalog::{
    Template, CONFLICT_ERROR, CONTENT_TYPE_ERROR, NOT_FOUND_ERROR, REQUIRED_FIELDS_ERROR,
};
use mcat_common::api::{is_json_content_type, parse_id, Origin, Outcome};
use mcat_common::Error;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Check the content type and decode the JSON body
///
/// Wrong content type wins over a malformed body.
pub(crate) fn decode_body<I: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<I, Template> {
    if !is_json_content_type(content_type) {
        debug!("Rejected content type: {:?}", content_type);
        return Err(CONTENT_TYPE_ERROR);
    }

    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        REQUIRED_FIELDS_ERROR
    })
}

/// Parse a path id or fail with REQUIRED_FIELDS_ERROR
pub(crate) fn require_id(raw_id: &str) -> Result<i64, Template> {
    parse_id(raw_id).ok_or(REQUIRED_FIELDS_ERROR)
}

/// Turn a persistence failure into its outcome
///
/// Constraint violations are the client's doing (409); everything else,
/// timeouts included, is an internal error.
pub(crate) fn persistence_failure<T>(err: Error) -> Outcome<T> {
    if err.is_conflict() {
        warn!("Write rejected by constraint: {}", err);
        return CONFLICT_ERROR.outcome();
    }
    Outcome::internal(Origin::Persistence, err)
}

/// FOUND with the record, or NOT_FOUND_ERROR
pub(crate) fn found_or_missing<T>(record: Option<T>, template: Template) -> Outcome<T> {
    match record {
        Some(record) => template.with_data(record),
        None => NOT_FOUND_ERROR.outcome(),
    }
}
