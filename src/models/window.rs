//! Work window and meeting models.
//!
//! Defines the two interval inputs of an allocation: the hours worked on
//! a day, and the fixed meetings that interrupt them.
//!
//! # Time Model
//! All times are wall-clock times of day (`NaiveTime`) with no date or
//! timezone attached. The day is carried separately as a [`DayLabel`].
//! Intervals are half-open: `[start, end)`.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::DayLabel;

/// A time-of-day interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Length of this window. Negative if `end` precedes `start`.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap. Touching windows do not.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The hours worked on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    /// Day this window belongs to.
    pub day: DayLabel,
    /// First working minute.
    pub start: NaiveTime,
    /// End of the working day (exclusive).
    pub end: NaiveTime,
}

impl WorkWindow {
    /// Creates a work window.
    pub fn new(day: impl Into<DayLabel>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            day: day.into(),
            start,
            end,
        }
    }

    /// The interval covered by this window.
    pub fn span(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }
}

/// A fixed meeting. Every meeting is booked as admin time.
///
/// A meeting only has an effect when some [`WorkWindow`] carries the
/// same day label; otherwise it is inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day the meeting takes place.
    pub day: DayLabel,
    /// Meeting start.
    pub start: NaiveTime,
    /// Meeting end (exclusive).
    pub end: NaiveTime,
}

impl Meeting {
    /// Creates a meeting.
    pub fn new(day: impl Into<DayLabel>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            day: day.into(),
            start,
            end,
        }
    }

    /// The interval covered by this meeting.
    pub fn span(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Whether this meeting falls on the given day.
    pub fn is_on(&self, day: &DayLabel) -> bool {
        &self.day == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(t(9, 0), t(17, 0));
        assert_eq!(w.duration(), TimeDelta::hours(8));
        assert!(w.is_well_formed());
        assert!(w.contains(t(9, 0)));
        assert!(w.contains(t(16, 59)));
        assert!(!w.contains(t(17, 0))); // exclusive end
        assert!(!w.contains(t(8, 30)));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(t(9, 0), t(10, 0));
        let b = TimeWindow::new(t(9, 30), t(11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(t(10, 0), t(11, 0)); // touching but not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_reversed_window() {
        let w = TimeWindow::new(t(17, 0), t(9, 0));
        assert!(!w.is_well_formed());
        assert!(w.duration() < TimeDelta::zero());
    }

    #[test]
    fn test_meeting_day_match() {
        let m = Meeting::new("Monday", t(12, 0), t(13, 0));
        assert!(m.is_on(&DayLabel::from("Monday")));
        assert!(!m.is_on(&DayLabel::from("Tuesday")));
        assert_eq!(m.span().duration(), TimeDelta::hours(1));
    }

    #[test]
    fn test_work_window_span() {
        let w = WorkWindow::new("Friday", t(9, 0), t(16, 30));
        assert_eq!(w.span().duration(), TimeDelta::minutes(450));
        assert_eq!(w.day, "Friday");
    }
}
