//! User database operations
//!
//! Passwords arrive already hashed (see `mcat_common::password`) and are
//! never read back out of the table.

use mcat_common::password::PasswordHash;
use mcat_common::Result;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Validated values written on insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub password: PasswordHash,
}

fn from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
    }
}

/// Insert a user and return its public view
///
/// Fails with a unique violation when the email is taken.
pub async fn insert_user(pool: &SqlitePool, fields: &UserFields) -> Result<User> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash, password_salt, created_at, updated_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.password.hash)
    .bind(&fields.password.salt)
    .execute(pool)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: fields.name.clone(),
        email: fields.email.clone(),
    })
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(from_row))
}

/// Replace a user's fields; `None` when the id does not exist
pub async fn update_user(pool: &SqlitePool, id: i64, fields: &UserFields) -> Result<Option<User>> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = ?, email = ?, password_hash = ?, password_salt = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.password.hash)
    .bind(&fields.password.salt)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    Ok(Some(User {
        id,
        name: fields.name.clone(),
        email: fields.email.clone(),
    }))
}

/// Delete a user; false when the id does not exist
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcat_common::password::{hash_password, verify_password};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        mcat_common::db::create_users_table(&pool).await.unwrap();
        pool
    }

    async fn load_password(pool: &SqlitePool, id: i64) -> Option<PasswordHash> {
        sqlx::query("SELECT password_hash, password_salt FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .unwrap()
            .map(|row| PasswordHash {
                hash: row.get("password_hash"),
                salt: row.get("password_salt"),
            })
    }

    fn fields(email: &str) -> UserFields {
        UserFields {
            name: "Laura".to_string(),
            email: email.to_string(),
            password: hash_password("hunter22"),
        }
    }

    #[tokio::test]
    async fn test_insert_stores_hash_only() {
        let pool = test_pool().await;
        let user = insert_user(&pool, &fields("laura@example.com")).await.unwrap();

        let stored = load_password(&pool, user.id).await.unwrap();
        assert_ne!(stored.hash, "hunter22");
        assert!(verify_password("hunter22", &stored));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        insert_user(&pool, &fields("dup@example.com")).await.unwrap();

        let err = insert_user(&pool, &fields("dup@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let pool = test_pool().await;
        assert_eq!(update_user(&pool, 7, &fields("x@example.com")).await.unwrap(), None);
        assert!(!delete_user(&pool, 7).await.unwrap());
    }
}
