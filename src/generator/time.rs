//! Time utilities for version 1 UUID timestamps
//!
//! The version 1 timestamp counts 100 ns ticks since the Gregorian calendar
//! epoch, 1582-10-15T00:00:00Z. The millisecond offset between that epoch
//! and the Unix epoch is computed once and reused for every conversion in
//! both directions.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

/// Number of 100 ns ticks per millisecond
pub(crate) const TICKS_PER_MS: i64 = 10_000;

static GREGORIAN_EPOCH_MS: Lazy<i64> = Lazy::new(|| {
    Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0)
        .single()
        .expect("1582-10-15T00:00:00Z is a valid UTC datetime")
        .timestamp_millis()
});

static MONOTONIC_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Unix milliseconds of the Gregorian calendar epoch (a negative constant)
#[inline]
pub(crate) fn gregorian_epoch_ms() -> i64 {
    *GREGORIAN_EPOCH_MS
}

/// Current wall-clock time in milliseconds since the Unix epoch
#[inline]
pub(crate) fn now_unix_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch!")
        .as_millis() as i64
}

/// Monotonic nanosecond counter supplying the sub-millisecond timestamp
/// digits when the caller does not provide them
#[inline]
pub(crate) fn subsecond_nanos() -> u64 {
    MONOTONIC_START.elapsed().as_nanos() as u64
}

/// Converts wall-clock time to 100 ns ticks since the Gregorian epoch.
///
/// Only the sub-millisecond digits of `subsec_nanos` contribute, and
/// precision below 100 ns is truncated, not rounded.
#[inline]
pub(crate) fn uuid_ticks(time_ms: i64, subsec_nanos: u64) -> i64 {
    let sub_ticks = ((subsec_nanos / 100) % TICKS_PER_MS as u64) as i64;
    (time_ms - gregorian_epoch_ms()) * TICKS_PER_MS + sub_ticks
}

/// Inverse of [`uuid_ticks`] at millisecond resolution
#[inline]
pub(crate) fn epoch_millis(uuid_time: u64) -> i64 {
    (uuid_time / TICKS_PER_MS as u64) as i64 + gregorian_epoch_ms()
}
