//! File input and output.
//!
//! - **`reader`**: plain-text schedule, meeting, and project files
//! - **`writer`**: CSV timesheet output

pub mod reader;
pub mod writer;

pub use reader::{
    parse_meetings, parse_projects, parse_schedule, read_meetings, read_projects, read_schedule,
};
pub use writer::{write_timesheet, write_timesheet_file};
