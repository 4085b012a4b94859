//! Persistence layer for mcat-api
//!
//! One module per entity, each exposing insert/list/get/update/delete over a
//! shared `SqlitePool`. Functions return `mcat_common::Result`; converting
//! failures into response outcomes is the handlers' job.

pub mod labels;
pub mod tracks;
pub mod users;

use mcat_common::{Error, Result};
use std::future::Future;
use std::time::Duration;

pub use labels::{Label, LabelFields};
pub use tracks::{Track, TrackFields};
pub use users::{User, UserFields};

/// Run a persistence call with an upper time bound
///
/// An elapsed bound becomes [`Error::Timeout`]; the call itself is dropped.
pub async fn with_timeout<T, F>(limit: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(limit.as_millis() as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let value = with_timeout(Duration::from_secs(1), async { Ok(5) })
            .await
            .unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn test_with_timeout_elapsed() {
        let result: Result<()> = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(Error::Timeout(10))));
    }
}
