//! Plain-text input readers.
//!
//! # Formats
//!
//! | File | Line format | Example |
//! |------|-------------|---------|
//! | Schedule | `<Day>: <Start> - <End>` | `Monday: 9:00AM - 5:00PM` |
//! | Meetings | `<Day>: <Start> - <End>` | `Monday: 12:00PM - 1:00PM` |
//! | Projects | `<Name>, <Weight>` | `Apollo, 3` |
//!
//! Times use the 12-hour clock with an AM/PM suffix; the hour needs no
//! leading zero. Blank lines are skipped. Any malformed line aborts the
//! read with a [`ParseError`] naming the line.

use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use log::info;

use crate::error::{ParseError, ParseErrorKind, Result, TimesheetError};
use crate::models::{DayLabel, Meeting, ProjectWeight, WorkWindow};
use crate::time::parse_clock;

const DAY_DELIMITER: &str = ": ";
const RANGE_DELIMITER: &str = " - ";
const WEIGHT_DELIMITER: char = ',';

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parses schedule lines into work windows, in input order.
pub fn parse_schedule(input: &str, source_name: &str) -> ParseResult<Vec<WorkWindow>> {
    non_blank_lines(input)
        .map(|(line_no, line)| {
            let (day, start, end) = parse_interval(line, source_name, line_no)?;
            Ok(WorkWindow { day, start, end })
        })
        .collect()
}

/// Parses meeting lines, in input order.
pub fn parse_meetings(input: &str, source_name: &str) -> ParseResult<Vec<Meeting>> {
    non_blank_lines(input)
        .map(|(line_no, line)| {
            let (day, start, end) = parse_interval(line, source_name, line_no)?;
            Ok(Meeting { day, start, end })
        })
        .collect()
}

/// Parses project lines, in input order.
///
/// Fields after the weight are ignored.
pub fn parse_projects(input: &str, source_name: &str) -> ParseResult<Vec<ProjectWeight>> {
    non_blank_lines(input)
        .map(|(line_no, line)| {
            let err = |kind| ParseError::new(source_name, line_no, kind);

            let mut fields = line.split(WEIGHT_DELIMITER);
            let name = fields.next().unwrap_or_default().trim();
            let weight = fields
                .next()
                .ok_or_else(|| err(ParseErrorKind::MissingDelimiter(",")))?
                .trim();

            if name.is_empty() {
                return Err(err(ParseErrorKind::EmptyField("project name")));
            }
            let weight: u32 = weight
                .parse()
                .map_err(|_| err(ParseErrorKind::InvalidWeight(weight.to_string())))?;

            Ok(ProjectWeight::new(name, weight))
        })
        .collect()
}

/// Reads a schedule file.
pub fn read_schedule(path: impl AsRef<Path>) -> Result<Vec<WorkWindow>> {
    let path = path.as_ref();
    let windows = parse_schedule(&read_input(path)?, &path.display().to_string())?;
    info!("read {} work windows from {}", windows.len(), path.display());
    Ok(windows)
}

/// Reads a meetings file.
pub fn read_meetings(path: impl AsRef<Path>) -> Result<Vec<Meeting>> {
    let path = path.as_ref();
    let meetings = parse_meetings(&read_input(path)?, &path.display().to_string())?;
    info!("read {} meetings from {}", meetings.len(), path.display());
    Ok(meetings)
}

/// Reads a projects file.
pub fn read_projects(path: impl AsRef<Path>) -> Result<Vec<ProjectWeight>> {
    let path = path.as_ref();
    let projects = parse_projects(&read_input(path)?, &path.display().to_string())?;
    info!("read {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TimesheetError::io(path, e))
}

/// Trimmed non-blank lines with 1-based line numbers.
fn non_blank_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parses `<Day>: <Start> - <End>`.
fn parse_interval(
    line: &str,
    source_name: &str,
    line_no: usize,
) -> ParseResult<(DayLabel, NaiveTime, NaiveTime)> {
    let err = |kind| ParseError::new(source_name, line_no, kind);

    let (day, hours) = line
        .split_once(DAY_DELIMITER)
        .ok_or_else(|| err(ParseErrorKind::MissingDelimiter(DAY_DELIMITER)))?;
    let day = day.trim();
    if day.is_empty() {
        return Err(err(ParseErrorKind::EmptyField("day label")));
    }

    let (start, end) = hours
        .split_once(RANGE_DELIMITER)
        .ok_or_else(|| err(ParseErrorKind::MissingDelimiter(RANGE_DELIMITER)))?;
    let clock = |text: &str| {
        parse_clock(text).map_err(|_| err(ParseErrorKind::InvalidTime(text.trim().to_string())))
    };

    Ok((DayLabel::new(day), clock(start)?, clock(end)?))
}
