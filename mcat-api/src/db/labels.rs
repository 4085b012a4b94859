//! Label database operations

use mcat_common::Result;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Record label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
}

/// Validated values written on insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFields {
    pub name: String,
    pub country: Option<String>,
    pub website: Option<String>,
}

fn from_row(row: &SqliteRow) -> Label {
    Label {
        id: row.get("id"),
        name: row.get("name"),
        country: row.get("country"),
        website: row.get("website"),
    }
}

/// Insert a label and return it with its assigned id
pub async fn insert_label(pool: &SqlitePool, fields: &LabelFields) -> Result<Label> {
    let result = sqlx::query(
        r#"
        INSERT INTO labels (name, country, website, created_at, updated_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.country)
    .bind(&fields.website)
    .execute(pool)
    .await?;

    Ok(Label {
        id: result.last_insert_rowid(),
        name: fields.name.clone(),
        country: fields.country.clone(),
        website: fields.website.clone(),
    })
}

/// All labels ordered by id
pub async fn list_labels(pool: &SqlitePool) -> Result<Vec<Label>> {
    let rows = sqlx::query("SELECT id, name, country, website FROM labels ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_label(pool: &SqlitePool, id: i64) -> Result<Option<Label>> {
    let row = sqlx::query("SELECT id, name, country, website FROM labels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(from_row))
}

/// Replace a label's fields; `None` when the id does not exist
pub async fn update_label(
    pool: &SqlitePool,
    id: i64,
    fields: &LabelFields,
) -> Result<Option<Label>> {
    let result = sqlx::query(
        r#"
        UPDATE labels
        SET name = ?, country = ?, website = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.country)
    .bind(&fields.website)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_label(pool, id).await
}

/// Delete a label; false when the id does not exist
pub async fn delete_label(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM labels WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
