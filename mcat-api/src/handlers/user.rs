//! User handler
//!
//! The clear-text password only lives long enough to be hashed; responses
//! carry the public [`User`] view.

use mcat_common::api::catalog::{
    CREATED, DELETED, FOUND, NOT_FOUND_ERROR, REQUIRED_FIELDS_ERROR, UPDATED,
};
use mcat_common::api::request::required_text;
use mcat_common::api::{Listing, Outcome};
use mcat_common::password::hash_password;
use serde::Deserialize;
use tracing::info;

use super::{decode_body, found_or_missing, persistence_failure, require_id};
use crate::db::{self, with_timeout, User, UserFields};
use crate::AppState;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 64;

/// Request body for create and update
#[derive(Default, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// Keeps the password out of logs
impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl UserInput {
    pub fn validate(self) -> Option<UserFields> {
        let email_ok = required_text(self.email.as_deref(), EMAIL_MAX)
            && self.email.as_deref().is_some_and(|e| e.contains('@'));
        let password_ok = self.password.as_deref().is_some_and(|p| {
            let len = p.chars().count();
            (PASSWORD_MIN..=PASSWORD_MAX).contains(&len)
        });

        if !(required_text(self.name.as_deref(), NAME_MAX) && email_ok && password_ok) {
            return None;
        }

        Some(UserFields {
            name: self.name?.trim().to_string(),
            email: self.email?.trim().to_lowercase(),
            password: hash_password(&self.password?),
        })
    }
}

pub async fn create(state: &AppState, content_type: Option<&str>, body: &[u8]) -> Outcome<User> {
    let input: UserInput = match decode_body(content_type, body) {
        Ok(input) => input,
        Err(template) => return template.outcome(),
    };
    let Some(fields) = input.validate() else {
        return REQUIRED_FIELDS_ERROR.outcome();
    };

    match with_timeout(state.persistence_timeout, db::users::insert_user(&state.db, &fields)).await {
        Ok(user) => {
            info!("Created user {}", user.id);
            CREATED.with_data(user)
        }
        Err(e) => persistence_failure(e),
    }
}

pub async fn list(state: &AppState) -> Outcome<Listing<User>> {
    match with_timeout(state.persistence_timeout, db::users::list_users(&state.db)).await {
        Ok(users) if users.is_empty() => NOT_FOUND_ERROR.outcome(),
        Ok(users) => FOUND.with_data(Listing::new(users)),
        Err(e) => persistence_failure(e),
    }
}

pub async fn get(state: &AppState, raw_id: &str) -> Outcome<User> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::users::get_user(&state.db, id)).await {
        Ok(user) => found_or_missing(user, FOUND),
        Err(e) => persistence_failure(e),
    }
}

pub async fn update(
    state: &AppState,
    raw_id: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Outcome<User> {
    let input: UserInput = match decode_body(content_type, body) {
        Ok(input) => input,
        Err(template) => return template.outcome(),
    };
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };
    let Some(fields) = input.validate() else {
        return REQUIRED_FIELDS_ERROR.outcome();
    };

    match with_timeout(
        state.persistence_timeout,
        db::users::update_user(&state.db, id, &fields),
    )
    .await
    {
        Ok(user) => found_or_missing(user, UPDATED),
        Err(e) => persistence_failure(e),
    }
}

pub async fn delete(state: &AppState, raw_id: &str) -> Outcome<()> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::users::delete_user(&state.db, id)).await {
        Ok(true) => {
            info!("Deleted user {}", id);
            DELETED.outcome()
        }
        Ok(false) => NOT_FOUND_ERROR.outcome(),
        Err(e) => persistence_failure(e),
    }
}
