//! Block-filling allocator.
//!
//! # Algorithm
//!
//! For each work window:
//! 1. Take that day's meetings, sorted by start time.
//! 2. Put a cursor at the window start.
//! 3. Before each meeting, book whole slots while `cursor + slot <= meeting.start`,
//!    each to a sampled project. A sub-slot gap before the meeting is dropped.
//! 4. Book one admin record at the meeting start, whatever its length,
//!    then jump the cursor to the meeting end. A meeting that starts inside
//!    the previous one never moves the cursor backwards.
//! 5. After the last meeting, book whole slots while `cursor + slot <= window.end`.
//!    A trailing partial slot is dropped.
//!
//! Slots are exactly one hour wide. Record start times are rounded to the nearest half hour; the cursor
//! itself is never rounded.
//!
//! # Complexity
//! O(w * m + s) where w=windows, m=meetings, s=slots booked.

use chrono::{NaiveTime, TimeDelta};
use log::debug;
use rand::Rng;

use crate::models::{AssignmentRecord, Meeting, ProjectWeight, Timesheet, WorkWindow};
use crate::sampling::WeightedSampler;
use crate::time::{advance, round_to_half_hour};

/// Width of every booked slot.
pub const SLOT_LENGTH: TimeDelta = TimeDelta::hours(1);

/// Input container for allocation.
#[derive(Debug, Clone, Default)]
pub struct AllocationRequest {
    /// Work windows, in output order.
    pub windows: Vec<WorkWindow>,
    /// Meetings, any day, any order.
    pub meetings: Vec<Meeting>,
    /// Projects to draw free slots from.
    pub projects: Vec<ProjectWeight>,
}

impl AllocationRequest {
    /// Creates a new allocation request.
    pub fn new(windows: Vec<WorkWindow>, projects: Vec<ProjectWeight>) -> Self {
        Self {
            windows,
            meetings: Vec::new(),
            projects,
        }
    }

    /// Sets the meetings.
    pub fn with_meetings(mut self, meetings: Vec<Meeting>) -> Self {
        self.meetings = meetings;
        self
    }
}

/// Block-filling allocator.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timesheet::allocator::{AllocationRequest, BlockAllocator};
/// use u_timesheet::models::{Meeting, ProjectWeight, WorkWindow};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let request = AllocationRequest::new(
///     vec![WorkWindow::new("Monday", t(9), t(17))],
///     vec![ProjectWeight::new("Apollo", 1)],
/// )
/// .with_meetings(vec![Meeting::new("Monday", t(12), t(13))]);
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let timesheet = BlockAllocator::new().allocate_request(&request, &mut rng).unwrap();
/// assert_eq!(timesheet.len(), 8);
/// assert_eq!(timesheet.admin_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockAllocator;

impl BlockAllocator {
    /// Creates an allocator with one-hour slots.
    pub fn new() -> Self {
        Self
    }

    /// Allocates one day lazily.
    ///
    /// Only meetings with the window's day label are considered. A
    /// project is drawn from `sampler` each time a free slot is pulled.
    pub fn allocate_day<'a, R: Rng + ?Sized>(
        &self,
        window: &'a WorkWindow,
        meetings: &'a [Meeting],
        sampler: &'a WeightedSampler,
        rng: &'a mut R,
    ) -> DaySlots<'a, R> {
        let mut day_meetings: Vec<&Meeting> =
            meetings.iter().filter(|m| m.is_on(&window.day)).collect();
        day_meetings.sort_by_key(|m| m.start);

        DaySlots {
            window,
            meetings: day_meetings,
            next_meeting: 0,
            cursor: window.start,
            last_meeting_end: None,
            sampler,
            rng,
            finished: false,
        }
    }

    /// Allocates every window in order and concatenates the results.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        windows: &[WorkWindow],
        meetings: &[Meeting],
        sampler: &WeightedSampler,
        rng: &mut R,
    ) -> Timesheet {
        let mut timesheet = Timesheet::new();
        for window in windows {
            let before = timesheet.len();
            timesheet.extend(self.allocate_day(window, meetings, sampler, &mut *rng));
            debug!(
                "allocated {} slots on {}",
                timesheet.len() - before,
                window.day
            );
        }
        timesheet
    }

    /// Allocates from a request.
    ///
    /// # Errors
    /// Fails if the request's project set cannot be sampled.
    pub fn allocate_request<R: Rng + ?Sized>(
        &self,
        request: &AllocationRequest,
        rng: &mut R,
    ) -> Result<Timesheet, crate::error::SamplerError> {
        let sampler = WeightedSampler::new(&request.projects)?;
        Ok(self.allocate(&request.windows, &request.meetings, &sampler, rng))
    }
}

/// Lazy slot sequence for one day.
///
/// Yields records in chronological order and ends after the last whole
/// slot that fits in the window.
pub struct DaySlots<'a, R: ?Sized> {
    window: &'a WorkWindow,
    meetings: Vec<&'a Meeting>,
    next_meeting: usize,
    cursor: NaiveTime,
    last_meeting_end: Option<NaiveTime>,
    sampler: &'a WeightedSampler,
    rng: &'a mut R,
    finished: bool,
}

impl<R: Rng + ?Sized> DaySlots<'_, R> {
    fn project_slot(&mut self) -> AssignmentRecord {
        let name = self.sampler.sample(&mut *self.rng);
        AssignmentRecord::project(
            self.window.day.clone(),
            round_to_half_hour(self.cursor),
            name,
        )
    }
}

impl<R: Rng + ?Sized> Iterator for DaySlots<'_, R> {
    type Item = AssignmentRecord;

    fn next(&mut self) -> Option<AssignmentRecord> {
        if self.finished {
            return None;
        }

        let meeting = self.meetings.get(self.next_meeting).copied();
        let boundary = meeting.map_or(self.window.end, |m| m.start);

        // Whole free slot before the boundary
        if let Some(slot_end) = advance(self.cursor, SLOT_LENGTH) {
            if slot_end <= boundary {
                let record = self.project_slot();
                self.cursor = slot_end;
                return Some(record);
            }
        }

        match meeting {
            Some(m) => {
                self.next_meeting += 1;
                let nested = self.last_meeting_end.is_some_and(|end| m.start < end);
                self.cursor = if nested { self.cursor.max(m.end) } else { m.end };
                self.last_meeting_end =
                    Some(self.last_meeting_end.map_or(m.end, |end| end.max(m.end)));
                Some(AssignmentRecord::admin(
                    self.window.day.clone(),
                    round_to_half_hour(m.start),
                ))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}
