//! Weekly timesheet allocation.
//!
//! Turns a set of daily work windows and fixed meetings into an
//! hour-by-hour project log. Free hours are booked to projects drawn by
//! weighted random choice; each meeting is booked once as "Admin Work".
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DayLabel`, `WorkWindow`, `Meeting`,
//!   `ProjectWeight`, `AssignmentRecord`, `Timesheet`
//! - **`allocator`**: Block-filling allocator and timesheet summary
//! - **`sampling`**: Weighted project sampler over an injected RNG
//! - **`time`**: Half-hour rounding and 12-hour clock helpers
//! - **`validation`**: Input integrity checks (weights, intervals, overlaps)
//! - **`io`**: Plain-text readers and CSV writer
//! - **`pipeline`**: Read → validate → allocate → write
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_timesheet::allocator::BlockAllocator;
//! use u_timesheet::io::{parse_meetings, parse_projects, parse_schedule};
//! use u_timesheet::sampling::WeightedSampler;
//!
//! let windows = parse_schedule("Monday: 9:00AM - 5:00PM", "schedule").unwrap();
//! let meetings = parse_meetings("Monday: 12:00PM - 1:00PM", "meetings").unwrap();
//! let projects = parse_projects("Apollo, 1\nGemini, 3", "projects").unwrap();
//!
//! let sampler = WeightedSampler::new(&projects).unwrap();
//! let mut rng = SmallRng::seed_from_u64(42);
//! let timesheet = BlockAllocator::new().allocate(&windows, &meetings, &sampler, &mut rng);
//!
//! assert_eq!(timesheet.len(), 8);
//! assert_eq!(timesheet.records[3].start_label(), "12:00 PM");
//! assert!(timesheet.records[3].label.is_admin());
//! ```

pub mod allocator;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod sampling;
pub mod time;
pub mod validation;

pub use error::{Result, TimesheetError};
