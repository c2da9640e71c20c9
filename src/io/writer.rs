//! CSV timesheet writer.
//!
//! Output layout:
//!
//! ```text
//! Day,Start Time,Project
//! Monday,09:00 AM,Apollo
//! Monday,12:00 PM,Admin Work
//! ```
//!
//! Fields containing a comma, quote, CR or LF are quoted with embedded
//! quotes doubled (RFC 4180). Rows end with CRLF.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Result, TimesheetError};
use crate::models::Timesheet;

/// Header row columns.
pub const HEADER: [&str; 3] = ["Day", "Start Time", "Project"];

const ROW_TERMINATOR: &str = "\r\n";

/// Writes a timesheet as CSV.
pub fn write_timesheet<W: Write>(timesheet: &Timesheet, out: &mut W) -> std::io::Result<()> {
    write_row(out, &HEADER)?;
    for record in timesheet {
        let start = record.start_label();
        write_row(out, &[record.day.as_str(), start.as_str(), record.label.as_str()])?;
    }
    out.flush()
}

/// Writes a timesheet to a CSV file, replacing any existing file.
pub fn write_timesheet_file(timesheet: &Timesheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TimesheetError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_timesheet(timesheet, &mut out).map_err(|e| TimesheetError::io(path, e))?;
    info!("wrote {} rows to {}", timesheet.len(), path.display());
    Ok(())
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(escape_field(field).as_bytes())?;
    }
    out.write_all(ROW_TERMINATOR.as_bytes())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
