//! Opt-in exponential-backoff retry helper.
//!
//! Failed operations against the external storage client can be retried with a
//! fixed schedule: three attempts, sleeping `2^attempt` seconds between them.
//! The sleep function is injected so callers choose how delays are served and
//! tests never actually wait. Nothing in the engine applies this automatically;
//! filtering, selection, and validation are never retried.

use std::time::Duration;

/// Total number of attempts before giving up.
pub const MAX_ATTEMPTS: u32 = 3;

/// Iterator over the backoff delays between attempts.
///
/// Yields `2^attempt` seconds for each retry: 2s after the first failure, 4s
/// after the second. The final attempt has no delay after it, so the iterator
/// yields `MAX_ATTEMPTS - 1` items.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use spacepicker::timing::Backoff;
///
/// let delays: Vec<Duration> = Backoff::new().collect();
/// assert_eq!(delays, vec![Duration::from_secs(2), Duration::from_secs(4)]);
/// ```
#[derive(Debug, Default)]
pub struct Backoff {
    attempt: u32,
}

impl Backoff {
    /// Creates a fresh backoff schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self { attempt: 0 }
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= MAX_ATTEMPTS {
            None
        } else {
            Some(Duration::from_secs(1 << self.attempt))
        }
    }
}

/// Runs an operation with exponential backoff, up to [`MAX_ATTEMPTS`] attempts.
///
/// The operation receives the 1-based attempt number. After each failed
/// attempt except the last, `sleep` is called with the next [`Backoff`] delay.
/// The error from the final attempt is returned unchanged.
///
/// # Errors
///
/// Returns the last attempt's error when every attempt fails.
///
/// # Examples
///
/// ```
/// use spacepicker::timing::retry_with_backoff;
///
/// let mut slept = Vec::new();
/// let result: Result<u32, &str> = retry_with_backoff(
///     |attempt| if attempt < 3 { Err("unavailable") } else { Ok(attempt) },
///     |delay| slept.push(delay.as_secs()),
/// );
///
/// assert_eq!(result, Ok(3));
/// assert_eq!(slept, vec![2, 4]);
/// ```
pub fn retry_with_backoff<T, E>(
    mut operation: impl FnMut(u32) -> Result<T, E>,
    mut sleep: impl FnMut(Duration),
) -> Result<T, E> {
    let mut backoff = Backoff::new();
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation(attempt) {
            Ok(value) => return Ok(value),
            // Backoff yields one delay fewer than MAX_ATTEMPTS, so the loop
            // always terminates through the None arm.
            Err(error) => match backoff.next() {
                Some(delay) => {
                    tracing::debug!(
                        attempt,
                        delay_secs = delay.as_secs(),
                        "operation failed, backing off"
                    );
                    sleep(delay);
                }
                None => {
                    tracing::debug!(attempt, "operation failed, giving up");
                    return Err(error);
                }
            },
        }
    }
}
