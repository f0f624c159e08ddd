//! Bounded retry for transient storage failures.
//!
//! Transactions that lose a serialization race are retried a small fixed
//! number of times with exponential backoff; after that the transient error
//! surfaces to the caller unchanged.

use reelist_common::AppResult;
use std::future::Future;
use std::time::Duration;

/// Maximum number of retries after the initial attempt.
pub const MAX_RETRIES: u32 = 3;

/// Initial backoff delay; doubled after every failed attempt.
const INITIAL_BACKOFF: Duration = Duration::from_millis(50);

/// Run `op`, retrying on retryable errors up to [`MAX_RETRIES`] times.
pub async fn with_retry<T, F, Fut>(op: F) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt: u32 = 0;
    let mut backoff = INITIAL_BACKOFF;

    loop {
        match op().await {
            Err(err) if err.is_retryable() && attempt < MAX_RETRIES => {
                attempt += 1;
                tracing::warn!(
                    error = %err,
                    attempt,
                    "transient storage failure, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            other => return other,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reelist_common::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_succeeds_first_try() {
        let calls = AtomicU32::new(0);
        let result = with_retry(|| async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, AppError>(7)
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_transient_then_succeeds() {
        let calls = AtomicU32::new(0);
        let result = with_retry(|| async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(AppError::Transient("serialization".into()))
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = with_retry(|| async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Transient("serialization".into()))
        })
        .await;

        assert!(matches!(result, Err(AppError::Transient(_))));
        assert_eq!(calls.load(Ordering::SeqCst), MAX_RETRIES + 1);
    }

    #[tokio::test]
    async fn test_permanent_errors_not_retried() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = with_retry(|| async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Validation("bad input".into()))
        })
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
