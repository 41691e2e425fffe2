//! Bounded retry with capped exponential backoff
//!
//! Every attempt is bounded by the policy's attempt timeout and raced
//! against the cancellation token, as is every backoff sleep.

use std::future::Future;
use std::time::Duration;

use rcast_common::config::RetryConfig;
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Delay before attempt `attempt + 1`, doubling from the initial backoff
pub fn backoff_delay(policy: &RetryConfig, attempt: u32) -> Duration {
    let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
    let ms = policy
        .initial_backoff_ms
        .saturating_mul(factor)
        .min(policy.max_backoff_ms);
    Duration::from_millis(ms)
}

/// Run `operation` until it succeeds, the attempt budget is spent, or
/// `cancel` fires.
///
/// An attempt that outlives `attempt_timeout_ms` is dropped and counts as a
/// failure ([`Error::Timeout`]). Returns the last error after the final
/// attempt, or [`Error::Cancelled`] as soon as `cancel` fires.
pub async fn retry_with_backoff<F, Fut, T>(
    operation_name: &str,
    policy: &RetryConfig,
    cancel: &CancellationToken,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let attempt_timeout = Duration::from_millis(policy.attempt_timeout_ms.max(1));
    let mut attempt = 0;

    loop {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        attempt += 1;

        if attempt > 1 {
            tracing::debug!(operation = operation_name, attempt, "Retrying operation");
        }

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            timed = tokio::time::timeout(attempt_timeout, operation()) => match timed {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::Timeout {
                    operation: operation_name.to_string(),
                    timeout_ms: policy.attempt_timeout_ms,
                }),
            },
        };

        let err = match outcome {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(
                        operation = operation_name,
                        attempt,
                        "Operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if attempt >= max_attempts {
            tracing::warn!(
                operation = operation_name,
                attempt,
                error = %err,
                "Operation failed: retry budget exhausted"
            );
            return Err(err);
        }

        let delay = backoff_delay(policy, attempt);
        tracing::trace!(
            operation = operation_name,
            attempt,
            backoff_ms = delay.as_millis() as u64,
            error = %err,
            "Operation failed, backing off"
        );

        tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
