use std::{fmt::Display, future::Future, time::Duration};

use tokio::time::sleep;

/// Runs `operation` until it succeeds or `max_retries` extra attempts have
/// failed, doubling the delay after each failure.
pub async fn retry_with_backoff<F, Fut, T, E>(
    what: &str,
    mut operation: F,
    max_retries: usize,
    initial_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut delay = initial_delay;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt < max_retries => {
                attempt += 1;
                tracing::warn!(
                    "{} failed (attempt {}/{}): {}. Retrying in {:?}...",
                    what,
                    attempt,
                    max_retries + 1,
                    e,
                    delay
                );
                sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
