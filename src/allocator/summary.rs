//! Timesheet summary metrics.
//!
//! Aggregates a finished timesheet into slot counts.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total slots | Number of records |
//! | Admin slots | Records booked to meetings |
//! | Slots by project | Records per project name (admin excluded) |
//! | Slots by day | Records per day label |
//! | Project share | Project slots / all non-admin slots |

use std::collections::HashMap;

use crate::models::{SlotLabel, Timesheet};

/// Slot counts for a timesheet.
#[derive(Debug, Clone, Default)]
pub struct TimesheetSummary {
    /// Number of records.
    pub total_slots: usize,
    /// Records booked to meetings.
    pub admin_slots: usize,
    /// Records per project.
    pub slots_by_project: HashMap<String, usize>,
    /// Records per day.
    pub slots_by_day: HashMap<String, usize>,
}

impl TimesheetSummary {
    /// Computes the summary of a timesheet.
    pub fn calculate(timesheet: &Timesheet) -> Self {
        let mut summary = Self {
            total_slots: timesheet.len(),
            ..Self::default()
        };

        for record in timesheet {
            *summary
                .slots_by_day
                .entry(record.day.to_string())
                .or_insert(0) += 1;

            match &record.label {
                SlotLabel::Admin => summary.admin_slots += 1,
                SlotLabel::Project(name) => {
                    *summary.slots_by_project.entry(name.clone()).or_insert(0) += 1;
                }
            }
        }

        summary
    }

    /// Records that went to projects.
    pub fn project_slots(&self) -> usize {
        self.total_slots - self.admin_slots
    }

    /// Fraction of project slots booked to `name`.
    ///
    /// Returns `None` if no project slot was booked.
    pub fn project_share(&self, name: &str) -> Option<f64> {
        let project_slots = self.project_slots();
        if project_slots == 0 {
            return None;
        }
        let count = self.slots_by_project.get(name).copied().unwrap_or(0);
        Some(count as f64 / project_slots as f64)
    }

    /// Project names sorted by slot count (descending), then name.
    pub fn ranked_projects(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .slots_by_project
            .iter()
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentRecord, DayLabel};
    use chrono::NaiveTime;

    fn sample_timesheet() -> Timesheet {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let mon = DayLabel::from("Monday");
        let tue = DayLabel::from("Tuesday");
        let mut ts = Timesheet::new();
        ts.push(AssignmentRecord::project(mon.clone(), t(9), "Apollo"));
        ts.push(AssignmentRecord::project(mon.clone(), t(10), "Gemini"));
        ts.push(AssignmentRecord::admin(mon.clone(), t(11)));
        ts.push(AssignmentRecord::project(mon, t(12), "Apollo"));
        ts.push(AssignmentRecord::project(tue, t(9), "Apollo"));
        ts
    }

    #[test]
    fn test_summary_counts() {
        let s = TimesheetSummary::calculate(&sample_timesheet());
        assert_eq!(s.total_slots, 5);
        assert_eq!(s.admin_slots, 1);
        assert_eq!(s.project_slots(), 4);
        assert_eq!(s.slots_by_project["Apollo"], 3);
        assert_eq!(s.slots_by_project["Gemini"], 1);
        assert_eq!(s.slots_by_day["Monday"], 4);
        assert_eq!(s.slots_by_day["Tuesday"], 1);
        assert!(!s.slots_by_project.contains_key("Admin Work"));
    }

    #[test]
    fn test_project_share() {
        let s = TimesheetSummary::calculate(&sample_timesheet());
        assert!((s.project_share("Apollo").unwrap() - 0.75).abs() < 1e-10);
        assert!((s.project_share("Gemini").unwrap() - 0.25).abs() < 1e-10);
        assert_eq!(s.project_share("Unknown"), Some(0.0));
    }

    #[test]
    fn test_ranked_projects() {
        let s = TimesheetSummary::calculate(&sample_timesheet());
        assert_eq!(s.ranked_projects(), vec![("Apollo", 3), ("Gemini", 1)]);
    }

    #[test]
    fn test_empty_summary() {
        let s = TimesheetSummary::calculate(&Timesheet::new());
        assert_eq!(s.total_slots, 0);
        assert_eq!(s.project_share("Apollo"), None);
        assert!(s.ranked_projects().is_empty());
    }
}
