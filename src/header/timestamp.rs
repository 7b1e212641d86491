//! Play time and save time conversions.
//!
//! Play time is stored as whole seconds. The save time is a count of 100ns
//! ticks since 0001-01-01T00:00:00 UTC.

use chrono::{DateTime, Utc};

use crate::error::{ParserError, Result};
use crate::format::{TICKS_EPOCH_OFFSET_SECS, TICKS_PER_SECOND};

/// Splits a play time in seconds into (hours, minutes, seconds).
#[must_use]
pub const fn play_time_parts(total_seconds: u32) -> (u32, u32, u32) {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    (hours, minutes, seconds)
}

/// Formats a play time as `"{h}h {m}m {s}s"`. Hours are not wrapped.
///
/// ```
/// use sav_stats::header::timestamp::format_play_time;
///
/// assert_eq!(format_play_time(3725), "1h 2m 5s");
/// assert_eq!(format_play_time(0), "0h 0m 0s");
/// ```
#[must_use]
pub fn format_play_time(total_seconds: u32) -> String {
    let (hours, minutes, seconds) = play_time_parts(total_seconds);
    format!("{hours}h {minutes}m {seconds}s")
}

/// Converts a tick count into a UTC timestamp.
///
/// Sub-second ticks are kept as nanoseconds.
///
/// # Errors
///
/// Returns `ParserError::InvalidHeader` if the resulting instant is outside
/// the range chrono can represent.
///
/// ```
/// use sav_stats::header::timestamp::ticks_to_datetime;
///
/// let year_one = ticks_to_datetime(0).unwrap();
/// assert_eq!(year_one.timestamp(), -62_135_596_800);
/// ```
pub fn ticks_to_datetime(ticks: u64) -> Result<DateTime<Utc>> {
    let whole_seconds = i64::try_from(ticks / TICKS_PER_SECOND).map_err(|_| out_of_range(ticks))?;
    let unix_seconds = whole_seconds - TICKS_EPOCH_OFFSET_SECS;
    let nanos = u32::try_from((ticks % TICKS_PER_SECOND) * 100).map_err(|_| out_of_range(ticks))?;

    DateTime::from_timestamp(unix_seconds, nanos).ok_or_else(|| out_of_range(ticks))
}

fn out_of_range(ticks: u64) -> ParserError {
    ParserError::InvalidHeader {
        reason: format!("save time tick count {ticks} is out of range"),
    }
}
