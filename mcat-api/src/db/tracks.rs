//! Track database operations

use mcat_common::Result;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Track record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    /// `HH:MM:SS`
    pub duration: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    pub lyrics: Option<String>,
    pub link: Option<String>,
    pub label_id: i64,
}

/// Validated values written on insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFields {
    pub title: String,
    pub duration: String,
    pub release_date: String,
    pub lyrics: Option<String>,
    pub link: Option<String>,
    pub label_id: i64,
}

impl TrackFields {
    fn into_track(self, id: i64) -> Track {
        Track {
            id,
            title: self.title,
            duration: self.duration,
            release_date: self.release_date,
            lyrics: self.lyrics,
            link: self.link,
            label_id: self.label_id,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, title, duration, release_date, lyrics, link, label_id FROM tracks";

fn from_row(row: &SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        title: row.get("title"),
        duration: row.get("duration"),
        release_date: row.get("release_date"),
        lyrics: row.get("lyrics"),
        link: row.get("link"),
        label_id: row.get("label_id"),
    }
}

/// Insert a track and return it with its assigned id
///
/// Fails with a foreign key violation when `label_id` names no label.
pub async fn insert_track(pool: &SqlitePool, fields: &TrackFields) -> Result<Track> {
    let result = sqlx::query(
        r#"
        INSERT INTO tracks (title, duration, release_date, lyrics, link, label_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.duration)
    .bind(&fields.release_date)
    .bind(&fields.lyrics)
    .bind(&fields.link)
    .bind(fields.label_id)
    .execute(pool)
    .await?;

    Ok(fields.clone().into_track(result.last_insert_rowid()))
}

/// All tracks ordered by id
pub async fn list_tracks(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_track(pool: &SqlitePool, id: i64) -> Result<Option<Track>> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(from_row))
}

/// Replace a track's fields; `None` when the id does not exist
pub async fn update_track(
    pool: &SqlitePool,
    id: i64,
    fields: &TrackFields,
) -> Result<Option<Track>> {
    let result = sqlx::query(
        r#"
        UPDATE tracks
        SET title = ?, duration = ?, release_date = ?, lyrics = ?, link = ?, label_id = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.duration)
    .bind(&fields.release_date)
    .bind(&fields.lyrics)
    .bind(&fields.link)
    .bind(fields.label_id)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    Ok(Some(fields.clone().into_track(id)))
}

/// Delete a track; false when the id does not exist
pub async fn delete_track(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
