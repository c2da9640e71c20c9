//! End-to-end run: read → validate → allocate → write.
//!
//! Stages run strictly in sequence; a failure in any stage aborts the run.
//! The output file is only created once allocation has succeeded.

use std::path::PathBuf;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::allocator::{BlockAllocator, TimesheetSummary};
use crate::error::Result;
use crate::io::{read_meetings, read_projects, read_schedule, write_timesheet_file};
use crate::models::{Meeting, ProjectWeight, Timesheet, WorkWindow};
use crate::sampling::WeightedSampler;
use crate::validation::{unmatched_meetings, validate_input};

/// File locations for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Work schedule input.
    pub schedule_path: PathBuf,
    /// Project weights input.
    pub projects_path: PathBuf,
    /// Meetings input.
    pub meetings_path: PathBuf,
    /// CSV output.
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schedule_path: PathBuf::from("schedule.txt"),
            projects_path: PathBuf::from("projects.txt"),
            meetings_path: PathBuf::from("meetings.txt"),
            output_path: PathBuf::from("scheduled_projects.csv"),
        }
    }
}

impl PipelineConfig {
    /// Resolves all paths relative to `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            schedule_path: dir.join(defaults.schedule_path),
            projects_path: dir.join(defaults.projects_path),
            meetings_path: dir.join(defaults.meetings_path),
            output_path: dir.join(defaults.output_path),
        }
    }

    /// Sets the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Reads all inputs, allocates, and writes the CSV.
///
/// Returns the timesheet that was written.
pub fn run<R: Rng + ?Sized>(config: &PipelineConfig, rng: &mut R) -> Result<Timesheet> {
    let windows = read_schedule(&config.schedule_path)?;
    let projects = read_projects(&config.projects_path)?;
    let meetings = read_meetings(&config.meetings_path)?;

    let timesheet = allocate(&BlockAllocator::new(), &windows, &meetings, &projects, rng)?;
    write_timesheet_file(&timesheet, &config.output_path)?;
    Ok(timesheet)
}

/// Validates inputs and allocates every window.
pub fn allocate<R: Rng + ?Sized>(
    allocator: &BlockAllocator,
    windows: &[WorkWindow],
    meetings: &[Meeting],
    projects: &[ProjectWeight],
    rng: &mut R,
) -> Result<Timesheet> {
    validate_input(windows, meetings, projects)?;

    for m in unmatched_meetings(windows, meetings) {
        debug!("ignoring meeting on {}: no work window for that day", m.day);
    }

    let sampler = WeightedSampler::new(projects)?;
    let timesheet = allocator.allocate(windows, meetings, &sampler, rng);

    let summary = TimesheetSummary::calculate(&timesheet);
    info!(
        "allocated {} slots over {} days ({} admin)",
        summary.total_slots,
        summary.slots_by_day.len(),
        summary.admin_slots
    );
    for (name, count) in summary.ranked_projects() {
        debug!("  {name}: {count} slots");
    }

    Ok(timesheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimesheetError;
    use chrono::NaiveTime;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_config() {
        let c = PipelineConfig::default();
        assert_eq!(c.schedule_path, PathBuf::from("schedule.txt"));
        assert_eq!(c.output_path, PathBuf::from("scheduled_projects.csv"));
    }

    #[test]
    fn test_config_partial_json() {
        let c: PipelineConfig =
            serde_json::from_str(r#"{"output_path": "out.csv"}"#).unwrap();
        assert_eq!(c.output_path, PathBuf::from("out.csv"));
        assert_eq!(c.projects_path, PathBuf::from("projects.txt"));
    }

    #[test]
    fn test_config_rejects_slot_length() {
        // Slot width is fixed at one hour
        let parsed: std::result::Result<PipelineConfig, _> =
            serde_json::from_str(r#"{"slot_minutes": 30}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_in_dir() {
        let c = PipelineConfig::in_dir("/data/week1");
        assert_eq!(c.meetings_path, PathBuf::from("/data/week1/meetings.txt"));
    }

    #[test]
    fn test_allocate_rejects_empty_projects() {
        let windows = vec![WorkWindow::new("Monday", t(9, 0), t(17, 0))];
        let mut rng = SmallRng::seed_from_u64(1);
        let err = allocate(&BlockAllocator::new(), &windows, &[], &[], &mut rng).unwrap_err();
        assert!(matches!(err, TimesheetError::Validation(_)));
    }

    #[test]
    fn test_allocate_rejects_overlap() {
        let windows = vec![WorkWindow::new("Monday", t(9, 0), t(17, 0))];
        let meetings = vec![
            Meeting::new("Monday", t(10, 0), t(11, 30)),
            Meeting::new("Monday", t(11, 0), t(12, 0)),
        ];
        let projects = vec![ProjectWeight::new("Apollo", 1)];
        let mut rng = SmallRng::seed_from_u64(1);
        let err =
            allocate(&BlockAllocator::new(), &windows, &meetings, &projects, &mut rng).unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn test_allocate_meeting_before_window() {
        let windows = vec![WorkWindow::new("Monday", t(9, 0), t(17, 0))];
        let meetings = vec![Meeting::new("Monday", t(7, 0), t(8, 0))];
        let projects = vec![ProjectWeight::new("Apollo", 1)];
        let mut rng = SmallRng::seed_from_u64(1);
        let ts = allocate(&BlockAllocator::new(), &windows, &meetings, &projects, &mut rng).unwrap();
        assert_eq!(ts.len(), 10);
        assert_eq!(ts.records[0].start_label(), "07:00 AM");
        assert_eq!(ts.records[1].start_label(), "08:00 AM");
    }

    #[test]
    fn test_allocate_ok() {
        let windows = vec![WorkWindow::new("Monday", t(9, 0), t(17, 0))];
        let meetings = vec![
            Meeting::new("Monday", t(12, 0), t(13, 0)),
            Meeting::new("Saturday", t(9, 0), t(10, 0)),
        ];
        let projects = vec![ProjectWeight::new("Apollo", 1)];
        let mut rng = SmallRng::seed_from_u64(1);
        let ts = allocate(&BlockAllocator::new(), &windows, &meetings, &projects, &mut rng).unwrap();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.records_for_label("Apollo").len(), 7);
    }
}
