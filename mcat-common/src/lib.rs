//! # Music Catalog Common Library
//!
//! Shared code for the music catalog service including:
//! - Result catalog and the uniform response envelope
//! - Request checks shared by every entity handler
//! - Database initialization
//! - Configuration loading
//! - Password hashing for stored users

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod password;

pub use api::{Outcome, Template};
pub use error::{Error, Result};
