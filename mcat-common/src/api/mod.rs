//! API module for the uniform response contract
//!
//! Every entity handler returns an [`Outcome`] built from one of the
//! [`catalog`] templates. The router writes it back unchanged: the HTTP
//! status is `status_code` and the body is the whole envelope.
//!
//! This module contains ONLY:
//! - The immutable result catalog
//! - The response envelope and its axum `IntoResponse` impl
//! - Request checks shared by every handler (content type, ids, fields)

pub mod catalog;
pub mod outcome;
pub mod request;

pub use catalog::Template;
pub use outcome::{Listing, Origin, Outcome};
pub use request::{is_json_content_type, parse_id};
