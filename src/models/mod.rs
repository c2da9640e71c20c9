//! Timesheet domain models.
//!
//! Provides the data types flowing through an allocation run: the
//! inputs (work windows, meetings, project weights) and the output
//! (a timesheet of booked slots).
//!
//! # Domain Mappings
//!
//! | u-timesheet | Consulting | Research Lab | Agency |
//! |-------------|------------|--------------|--------|
//! | WorkWindow | Billable day | Lab shift | Studio hours |
//! | Meeting | Client call | Group meeting | Stand-up |
//! | ProjectWeight | Engagement | Grant | Account |
//! | Timesheet | Billing log | Effort report | Time log |

mod day;
mod project;
mod timesheet;
mod window;

pub use day::DayLabel;
pub use project::{total_weight, ProjectWeight};
pub use timesheet::{AssignmentRecord, SlotLabel, Timesheet, ADMIN_WORK};
pub use window::{Meeting, TimeWindow, WorkWindow};
