//! Common error types for the music catalog

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised below the handler boundary
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistence call did not finish within the configured budget
    #[error("Persistence call timed out after {0} ms")]
    Timeout(u64),
}

impl Error {
    /// True when the database rejected the write because of a uniqueness or
    /// foreign key constraint.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Database(sqlx::Error::Database(db_err)) => matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_conflicts() {
        assert!(!Error::Timeout(5000).is_conflict());
        assert!(!Error::Config("bad".to_string()).is_conflict());
        assert!(!Error::Database(sqlx::Error::RowNotFound).is_conflict());
    }

    #[tokio::test]
    async fn test_unique_violation_is_conflict() {
        let pool = sqlx::SqlitePool::connect("sqlite::memory:").await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        sqlx::query("CREATE TABLE t (v TEXT UNIQUE)")
            .execute(&mut *conn)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (v) VALUES ('a')")
            .execute(&mut *conn)
            .await
            .unwrap();

        let err = sqlx::query("INSERT INTO t (v) VALUES ('a')")
            .execute(&mut *conn)
            .await
            .unwrap_err();

        assert!(Error::from(err).is_conflict());
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            Error::Timeout(250).to_string(),
            "Persistence call timed out after 250 ms"
        );
    }
}
