//! Timesheet (allocation result) model.
//!
//! A timesheet is the ordered log of hour slots produced by the
//! allocator: one record per slot, chronological within a day, days in
//! the order their work windows were supplied.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::DayLabel;
use crate::time::format_clock;

/// Label booked for every meeting slot.
pub const ADMIN_WORK: &str = "Admin Work";

/// What a slot was booked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotLabel {
    /// A project drawn by the sampler.
    Project(String),
    /// A meeting block.
    Admin,
}

impl SlotLabel {
    /// Display text of the label.
    pub fn as_str(&self) -> &str {
        match self {
            SlotLabel::Project(name) => name,
            SlotLabel::Admin => ADMIN_WORK,
        }
    }

    /// Whether this is a meeting block.
    pub fn is_admin(&self) -> bool {
        matches!(self, SlotLabel::Admin)
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Day of the slot.
    pub day: DayLabel,
    /// Slot start, rounded to the nearest half hour.
    pub start: NaiveTime,
    /// What the slot was booked for.
    pub label: SlotLabel,
}

impl AssignmentRecord {
    /// Creates a project record.
    pub fn project(day: DayLabel, start: NaiveTime, name: impl Into<String>) -> Self {
        Self {
            day,
            start,
            label: SlotLabel::Project(name.into()),
        }
    }

    /// Creates a meeting record.
    pub fn admin(day: DayLabel, start: NaiveTime) -> Self {
        Self {
            day,
            start,
            label: SlotLabel::Admin,
        }
    }

    /// Start time as `hh:mm AM`.
    pub fn start_label(&self) -> String {
        format_clock(self.start)
    }
}

/// Ordered sequence of booked slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Records in generation order.
    pub records: Vec<AssignmentRecord>,
}

impl Timesheet {
    /// Creates an empty timesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    /// Appends every record from an iterator, preserving order.
    pub fn extend<I: IntoIterator<Item = AssignmentRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no slot was booked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentRecord> {
        self.records.iter()
    }

    /// Returns all records for a given day.
    pub fn records_for_day(&self, day: &str) -> Vec<&AssignmentRecord> {
        self.records.iter().filter(|r| r.day == day).collect()
    }

    /// Returns all records booked under a label.
    pub fn records_for_label(&self, label: &str) -> Vec<&AssignmentRecord> {
        self.records
            .iter()
            .filter(|r| r.label.as_str() == label)
            .collect()
    }

    /// Number of meeting blocks.
    pub fn admin_count(&self) -> usize {
        self.records.iter().filter(|r| r.label.is_admin()).count()
    }

    /// Slot count per label.
    pub fn counts_by_label(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for r in &self.records {
            *counts.entry(r.label.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Day labels in first-seen order.
    pub fn days(&self) -> Vec<&DayLabel> {
        let mut days: Vec<&DayLabel> = Vec::new();
        for r in &self.records {
            if !days.contains(&&r.day) {
                days.push(&r.day);
            }
        }
        days
    }
}

impl<'a> IntoIterator for &'a Timesheet {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample_timesheet() -> Timesheet {
        let mon = DayLabel::from("Monday");
        let tue = DayLabel::from("Tuesday");
        let mut ts = Timesheet::new();
        ts.push(AssignmentRecord::project(mon.clone(), t(9, 0), "Apollo"));
        ts.push(AssignmentRecord::admin(mon.clone(), t(10, 0)));
        ts.push(AssignmentRecord::project(mon, t(11, 0), "Gemini"));
        ts.push(AssignmentRecord::project(tue, t(9, 0), "Apollo"));
        ts
    }

    #[test]
    fn test_slot_label_text() {
        assert_eq!(SlotLabel::Admin.to_string(), "Admin Work");
        assert_eq!(SlotLabel::Project("X".into()).as_str(), "X");
        assert!(SlotLabel::Admin.is_admin());
        assert!(!SlotLabel::Project("Admin Work".into()).is_admin());
    }

    #[test]
    fn test_records_for_day() {
        let ts = sample_timesheet();
        assert_eq!(ts.records_for_day("Monday").len(), 3);
        assert_eq!(ts.records_for_day("Tuesday").len(), 1);
        assert!(ts.records_for_day("Sunday").is_empty());
    }

    #[test]
    fn test_records_for_label() {
        let ts = sample_timesheet();
        assert_eq!(ts.records_for_label("Apollo").len(), 2);
        assert_eq!(ts.records_for_label(ADMIN_WORK).len(), 1);
        assert_eq!(ts.admin_count(), 1);
    }

    #[test]
    fn test_counts_by_label() {
        let ts = sample_timesheet();
        let counts = ts.counts_by_label();
        assert_eq!(counts["Apollo"], 2);
        assert_eq!(counts["Gemini"], 1);
        assert_eq!(counts["Admin Work"], 1);
    }

    #[test]
    fn test_days_first_seen_order() {
        let ts = sample_timesheet();
        let days: Vec<&str> = ts.days().iter().map(|d| d.as_str()).collect();
        assert_eq!(days, vec!["Monday", "Tuesday"]);
    }

    #[test]
    fn test_start_label() {
        let r = AssignmentRecord::admin(DayLabel::from("Monday"), t(13, 30));
        assert_eq!(r.start_label(), "01:30 PM");
    }

    #[test]
    fn test_empty_timesheet() {
        let ts = Timesheet::new();
        assert!(ts.is_empty());
        assert_eq!(ts.len(), 0);
        assert!(ts.days().is_empty());
    }
}
