//! Label handler

use mcat_common::api::catalog::{
    CREATED, DELETED, FOUND, NOT_FOUND_ERROR, REQUIRED_FIELDS_ERROR, UPDATED,
};
use mcat_common::api::request::{optional_text, required_text};
use mcat_common::api::{Listing, Outcome};
use serde::Deserialize;
use tracing::info;

use super::{decode_body, found_or_missing, persistence_failure, require_id};
use crate::db::{self, with_timeout, Label, LabelFields};
use crate::AppState;

pub const NAME_MAX: usize = 100;
pub const COUNTRY_MAX: usize = 60;
pub const WEBSITE_MAX: usize = 200;

/// Request body for create and update
#[derive(Debug, Default, Deserialize)]
pub struct LabelInput {
    pub name: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
}

impl LabelInput {
    pub fn validate(self) -> Option<LabelFields> {
        let valid = required_text(self.name.as_deref(), NAME_MAX)
            && optional_text(self.country.as_deref(), COUNTRY_MAX)
            && optional_text(self.website.as_deref(), WEBSITE_MAX);

        if !valid {
            return None;
        }

        Some(LabelFields {
            name: self.name?.trim().to_string(),
            country: self.country,
            website: self.website,
        })
    }
}

pub async fn create(state: &AppState, content_type: Option<&str>, body: &[u8]) -> Outcome<Label> {
    let input: LabelInput = match decode_body(content_type, body) {
        Ok(input) => input,
        Err(template) => return template.outcome(),
    };
    let Some(fields) = input.validate() else {
        return REQUIRED_FIELDS_ERROR.outcome();
    };

    match with_timeout(state.persistence_timeout, db::labels::insert_label(&state.db, &fields)).await {
        Ok(label) => {
            info!("Created label {} ({})", label.id, label.name);
            CREATED.with_data(label)
        }
        Err(e) => persistence_failure(e),
    }
}

pub async fn list(state: &AppState) -> Outcome<Listing<Label>> {
    match with_timeout(state.persistence_timeout, db::labels::list_labels(&state.db)).await {
        Ok(labels) if labels.is_empty() => NOT_FOUND_ERROR.outcome(),
        Ok(labels) => FOUND.with_data(Listing::new(labels)),
        Err(e) => persistence_failure(e),
    }
}

pub async fn get(state: &AppState, raw_id: &str) -> Outcome<Label> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::labels::get_label(&state.db, id)).await {
        Ok(label) => found_or_missing(label, FOUND),
        Err(e) => persistence_failure(e),
    }
}

pub async fn update(
    state: &AppState,
    raw_id: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Outcome<Label> {
    let input: LabelInput = match decode_body(content_type, body) {
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
        db::labels::update_label(&state.db, id, &fields),
    )
    .await
    {
        Ok(label) => found_or_missing(label, UPDATED),
        Err(e) => persistence_failure(e),
    }
}

/// Labels still referenced by tracks are kept (CONFLICT_ERROR)
pub async fn delete(state: &AppState, raw_id: &str) -> Outcome<()> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::labels::delete_label(&state.db, id)).await {
        Ok(true) => {
            info!("Deleted label {}", id);
            DELETED.outcome()
        }
        Ok(false) => NOT_FOUND_ERROR.outcome(),
        Err(e) => persistence_failure(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let input: LabelInput = serde_json::from_str(r#"{"country":"BR"}"#).unwrap();
        assert!(input.validate().is_none());

        let blank: LabelInput = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert!(blank.validate().is_none());
    }

    #[test]
    fn test_name_is_trimmed() {
        let input: LabelInput = serde_json::from_str(r#"{"name":" Elenco "}"#).unwrap();
        assert_eq!(input.validate().unwrap().name, "Elenco");
    }

    #[test]
    fn test_country_limit() {
        let input = LabelInput {
            name: Some("Label".to_string()),
            country: Some("c".repeat(COUNTRY_MAX + 1)),
            website: None,
        };
        assert!(input.validate().is_none());
    }
}
