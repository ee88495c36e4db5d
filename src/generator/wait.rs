//! Wait and backoff strategies for clock-sequence exhaustion
//!
//! An exhausted clock sequence recovers as soon as the timestamp advances
//! past the exhausted tick, so the generator sleeps briefly between
//! attempts, growing the pause up to a cap, until an optional deadline
//! runs out.

use std::thread;
use std::time::{Duration, Instant};

/// Longest single sleep between retry attempts
pub(crate) const MAX_BACKOFF: Duration = Duration::from_millis(100);

/// Sleeps before the next attempt, honoring the deadline if one is set.
///
/// Returns `false` without sleeping when the pause would overrun the
/// deadline; the caller then gives up with a timeout.
pub(crate) fn pause_for_retry(
    started: Instant,
    interval: Duration,
    max_wait: Option<Duration>,
) -> bool {
    if let Some(deadline) = max_wait {
        if started.elapsed() + interval > deadline {
            return false;
        }
    }
    thread::sleep(interval);
    true
}

/// Doubles the retry interval, capped at [`MAX_BACKOFF`]
pub(crate) fn next_backoff(current: Duration) -> Duration {
    current.saturating_mul(2).min(MAX_BACKOFF)
}
