//! Block-filling allocation and timesheet summaries.
//!
//! # Algorithm
//!
//! `BlockAllocator` walks each work window with a cursor, booking whole
//! slots to weighted-random projects and one admin record per meeting.
//! It does no optimization: no balancing across days, no avoidance of
//! repeated projects.
//!
//! # Summary
//!
//! `TimesheetSummary` counts booked slots per project and per day.

mod block;
mod summary;

pub use block::{AllocationRequest, BlockAllocator, DaySlots, SLOT_LENGTH};
pub use summary::TimesheetSummary;
