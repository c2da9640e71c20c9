//! Input validation for timesheet allocation.
//!
//! Checks structural integrity of work windows, meetings, and projects
//! before allocation. Detects:
//! - Empty or unsamplable project sets
//! - Blank and duplicate project names
//! - Zero weights
//! - Reversed or empty intervals
//! - Overlapping meetings on the same day
//!
//! Meetings on a day without a work window are not an error; see
//! [`unmatched_meetings`].

use std::collections::{HashMap, HashSet};

use crate::models::{DayLabel, Meeting, ProjectWeight, WorkWindow};
use crate::time::format_clock;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No projects were supplied.
    EmptyProjectSet,
    /// A project name is blank.
    EmptyProjectName,
    /// Two projects share the same name.
    DuplicateProject,
    /// A project has weight zero.
    ZeroWeight,
    /// A work window does not satisfy `start < end`.
    InvalidWindow,
    /// A meeting does not satisfy `start < end`.
    InvalidMeeting,
    /// Two meetings on the same day overlap.
    OverlappingMeetings,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an allocation run.
///
/// Checks:
/// 1. At least one project
/// 2. No blank project names
/// 3. No duplicate project names
/// 4. No zero weights
/// 5. Every work window has `start < end`
/// 6. Every meeting has `start < end`
/// 7. No two meetings on the same day overlap (touching is fine)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    windows: &[WorkWindow],
    meetings: &[Meeting],
    projects: &[ProjectWeight],
) -> ValidationResult {
    let mut errors = Vec::new();

    if projects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProjectSet,
            "No projects to allocate",
        ));
    }

    let mut names = HashSet::new();
    for p in projects {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyProjectName,
                "Project with blank name",
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProject,
                format!("Duplicate project: {}", p.name),
            ));
        }

        if p.weight == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeight,
                format!("Project '{}' has weight 0", p.name),
            ));
        }
    }

    for w in windows {
        if !w.span().is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Work window on '{}' ends at {} before it starts at {}",
                    w.day,
                    format_clock(w.end),
                    format_clock(w.start)
                ),
            ));
        }
    }

    for m in meetings {
        if !m.span().is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMeeting,
                format!(
                    "Meeting on '{}' ends at {} before it starts at {}",
                    m.day,
                    format_clock(m.end),
                    format_clock(m.start)
                ),
            ));
        }
    }

    errors.extend(detect_overlaps(meetings));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects overlapping meetings within each day.
///
/// # Algorithm
/// Group by day, sort by start, then compare each meeting against the
/// latest end seen so far (sweep line). Malformed meetings are skipped;
/// they are reported separately.
fn detect_overlaps(meetings: &[Meeting]) -> Vec<ValidationError> {
    let mut by_day: HashMap<&DayLabel, Vec<&Meeting>> = HashMap::new();
    let mut day_order: Vec<&DayLabel> = Vec::new();
    for m in meetings.iter().filter(|m| m.span().is_well_formed()) {
        by_day
            .entry(&m.day)
            .or_insert_with(|| {
                day_order.push(&m.day);
                Vec::new()
            })
            .push(m);
    }

    let mut errors = Vec::new();
    for day in day_order {
        let mut day_meetings = by_day.remove(day).unwrap_or_default();
        day_meetings.sort_by_key(|m| m.start);

        let mut latest: Option<&Meeting> = None;
        for m in day_meetings {
            if let Some(prev) = latest {
                if prev.span().overlaps(&m.span()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::OverlappingMeetings,
                        format!(
                            "Meetings on '{}' overlap: {}-{} and {}-{}",
                            day,
                            format_clock(prev.start),
                            format_clock(prev.end),
                            format_clock(m.start),
                            format_clock(m.end)
                        ),
                    ));
                }
                if m.end > prev.end {
                    latest = Some(m);
                }
            } else {
                latest = Some(m);
            }
        }
    }
    errors
}

/// Meetings whose day has no work window.
///
/// These are inert: they produce no records and are not an error.
pub fn unmatched_meetings<'a>(windows: &[WorkWindow], meetings: &'a [Meeting]) -> Vec<&'a Meeting> {
    let days: HashSet<&DayLabel> = windows.iter().map(|w| &w.day).collect();
    meetings.iter().filter(|m| !days.contains(&m.day)).collect()
}
