//! Daily time windows

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A named daily time window that course durations are scheduled against.
///
/// Blocks are immutable once derived from criteria. `start_hours < end_hours`
/// always holds, and `duration` is computed from the whole-second span between
/// the two times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct TimeBlock {
    /// Block slot: 1 for the morning window, 2 for the afternoon window
    pub id: u8,
    /// Display name
    pub name: String,
    /// Start time as written in the criteria (normalized to HH:MM)
    pub start: String,
    /// End time as written in the criteria (normalized to HH:MM)
    pub end: String,
    /// Start as decimal hours since midnight
    pub start_hours: f64,
    /// End as decimal hours since midnight
    pub end_hours: f64,
    /// Length of the window in hours
    pub duration: f64,
}

impl TimeBlock {
    /// Start of the window as a time of day.
    pub fn start_time(&self) -> Option<NaiveTime> {
        hours_to_time(self.start_hours)
    }

    /// End of the window as a time of day.
    pub fn end_time(&self) -> Option<NaiveTime> {
        hours_to_time(self.end_hours)
    }

    /// Check whether this block runs past the start of `next`.
    ///
    /// Touching windows (`self.end == next.start`) do not overlap.
    pub fn overlaps(&self, next: &TimeBlock) -> bool {
        self.end_hours > next.start_hours
    }
}

fn hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !(0.0..24.0).contains(&hours) {
        return None;
    }
    let seconds = (hours * 3600.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
