//! Clock helpers: half-hour rounding, 12-hour parsing and formatting,
//! and non-wrapping slot arithmetic.
//!
//! # Rounding Rule
//!
//! | Minute | Result |
//! |--------|--------|
//! | 0..15 | `hh:00` |
//! | 15..45 | `hh:30` |
//! | 45..60 | `(hh+1):00` |
//!
//! Seconds and sub-seconds are discarded. Rounding is used for display
//! labels only; interval arithmetic always works on unrounded times.

use chrono::{NaiveTime, TimeDelta, Timelike};

/// Input clock format, e.g. `9:00AM`.
pub const INPUT_CLOCK_FORMAT: &str = "%I:%M%p";

/// Output clock format, e.g. `09:00 AM`.
pub const OUTPUT_CLOCK_FORMAT: &str = "%I:%M %p";

/// Rounds a time to the nearest half hour.
///
/// 23:45 and later wraps to midnight.
pub fn round_to_half_hour(time: NaiveTime) -> NaiveTime {
    let hour_start = NaiveTime::default() + TimeDelta::hours(i64::from(time.hour()));
    match time.minute() {
        45.. => hour_start + TimeDelta::hours(1),
        15.. => hour_start + TimeDelta::minutes(30),
        _ => hour_start,
    }
}

/// Parses a 12-hour clock time such as `9:00AM` or `12:30pm`.
pub fn parse_clock(text: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text.trim(), INPUT_CLOCK_FORMAT)
}

/// Formats a time as `hh:mm AM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(OUTPUT_CLOCK_FORMAT).to_string()
}

/// Advances `time` by `step`, or `None` if that would cross midnight.
#[inline]
pub fn advance(time: NaiveTime, step: TimeDelta) -> Option<NaiveTime> {
    match time.overflowing_add_signed(step) {
        (next, 0) => Some(next),
        _ => None,
    }
}
