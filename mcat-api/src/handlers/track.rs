//! Track handler

use chrono::{NaiveDate, NaiveTime};
use mcat_common::api::catalog::{
    CREATED, DELETED, FOUND, NOT_FOUND_ERROR, REQUIRED_FIELDS_ERROR, UPDATED,
};
use mcat_common::api::request::{optional_text, required_text};
use mcat_common::api::{Listing, Outcome};
use serde::Deserialize;
use tracing::info;

use super::{decode_body, found_or_missing, persistence_failure, require_id};
use crate::db::{self, with_timeout, Track, TrackFields};
use crate::AppState;

pub const TITLE_MAX: usize = 100;
pub const LYRICS_MAX: usize = 5000;
pub const LINK_MAX: usize = 200;

/// Request body for create and update
#[derive(Debug, Default, Deserialize)]
pub struct TrackInput {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub release_date: Option<String>,
    pub lyrics: Option<String>,
    pub link: Option<String>,
    pub label_id: Option<i64>,
}

impl TrackInput {
    /// Required fields present and well formed, optional ones within limits
    pub fn validate(self) -> Option<TrackFields> {
        let valid = required_text(self.title.as_deref(), TITLE_MAX)
            && is_duration(self.duration.as_deref())
            && is_date(self.release_date.as_deref())
            && optional_text(self.lyrics.as_deref(), LYRICS_MAX)
            && optional_text(self.link.as_deref(), LINK_MAX);

        match (valid, self.label_id) {
            (true, Some(label_id)) if label_id > 0 => Some(TrackFields {
                title: self.title?.trim().to_string(),
                duration: self.duration?,
                release_date: self.release_date?,
                lyrics: self.lyrics,
                link: self.link,
                label_id,
            }),
            _ => None,
        }
    }
}

fn is_duration(value: Option<&str>) -> bool {
    value.is_some_and(|v| NaiveTime::parse_from_str(v, "%H:%M:%S").is_ok())
}

fn is_date(value: Option<&str>) -> bool {
    value.is_some_and(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok())
}

pub async fn create(state: &AppState, content_type: Option<&str>, body: &[u8]) -> Outcome<Track> {
    let input: TrackInput = match decode_body(content_type, body) {
        Ok(input) => input,
        Err(template) => return template.outcome(),
    };
    let Some(fields) = input.validate() else {
        return REQUIRED_FIELDS_ERROR.outcome();
    };

    match with_timeout(state.persistence_timeout, db::tracks::insert_track(&state.db, &fields)).await {
        Ok(track) => {
            info!("Created track {} ({})", track.id, track.title);
            CREATED.with_data(track)
        }
        Err(e) => persistence_failure(e),
    }
}

pub async fn list(state: &AppState) -> Outcome<Listing<Track>> {
    match with_timeout(state.persistence_timeout, db::tracks::list_tracks(&state.db)).await {
        Ok(tracks) if tracks.is_empty() => NOT_FOUND_ERROR.outcome(),
        Ok(tracks) => FOUND.with_data(Listing::new(tracks)),
        Err(e) => persistence_failure(e),
    }
}

pub async fn get(state: &AppState, raw_id: &str) -> Outcome<Track> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::tracks::get_track(&state.db, id)).await {
        Ok(track) => found_or_missing(track, FOUND),
        Err(e) => persistence_failure(e),
    }
}

pub async fn update(
    state: &AppState,
    raw_id: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Outcome<Track> {
    let input: TrackInput = match decode_body(content_type, body) {
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
        db::tracks::update_track(&state.db, id, &fields),
    )
    .await
    {
        Ok(track) => found_or_missing(track, UPDATED),
        Err(e) => persistence_failure(e),
    }
}

pub async fn delete(state: &AppState, raw_id: &str) -> Outcome<()> {
    let id = match require_id(raw_id) {
        Ok(id) => id,
        Err(template) => return template.outcome(),
    };

    match with_timeout(state.persistence_timeout, db::tracks::delete_track(&state.db, id)).await {
        Ok(true) => {
            info!("Deleted track {}", id);
            DELETED.outcome()
        }
        Ok(false) => NOT_FOUND_ERROR.outcome(),
        Err(e) => persistence_failure(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TrackInput {
        TrackInput {
            title: Some("Garota de Ipanema".to_string()),
            duration: Some("00:05:24".to_string()),
            release_date: Some("1962-08-02".to_string()),
            lyrics: None,
            link: None,
            label_id: Some(1),
        }
    }

    #[test]
    fn test_complete_input_is_valid() {
        let fields = complete().validate().unwrap();
        assert_eq!(fields.label_id, 1);
        assert_eq!(fields.duration, "00:05:24");
    }

    #[test]
    fn test_missing_label_id() {
        let input = TrackInput {
            label_id: None,
            ..complete()
        };
        assert!(input.validate().is_none());
    }

    #[test]
    fn test_title_length_limit() {
        let input = TrackInput {
            title: Some("x".repeat(TITLE_MAX + 1)),
            ..complete()
        };
        assert!(input.validate().is_none());
    }

    #[test]
    fn test_malformed_duration_and_date() {
        let bad_duration = TrackInput {
            duration: Some("5 minutes".to_string()),
            ..complete()
        };
        assert!(bad_duration.validate().is_none());

        let bad_date = TrackInput {
            release_date: Some("02/08/1962".to_string()),
            ..complete()
        };
        assert!(bad_date.validate().is_none());
    }

    #[test]
    fn test_only_title_is_rejected() {
        let input: TrackInput = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert!(input.validate().is_none());
    }
}
