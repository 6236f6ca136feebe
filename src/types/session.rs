//! Assembled session records and learner cohorts

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Key used to group learners before they are split into cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// One group per training location
    #[default]
    Location,
    /// One group per (location, functional area) pair
    LocationAndFunctionalArea,
}

impl GroupType {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupType::Location => "location",
            GroupType::LocationAndFunctionalArea => "location_and_functional_area",
        }
    }
}

/// Sessions produced by one generation run, with the advisory warnings raised
/// while splitting its courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct GeneratedSchedule {
    pub sessions: Vec<Session>,
    pub warnings: Vec<crate::types::Warning>,
}

/// Fully populated session record handed to persistence and UI consumers.
///
/// One record exists per (course, cohort, session part) combination. Records are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Session {
    // Course identity
    pub course_id: String,
    pub course_name: String,
    pub duration_hrs: f64,
    pub priority: Option<u32>,

    // Part placement
    pub title: String,
    pub session_id: String,
    pub part: u32,
    pub total_parts: u32,
    pub day: u32,
    pub total_days: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Length of this part in hours
    pub duration: f64,
    pub block_id: u8,
    pub block_name: String,

    // Grouping
    pub group_name: String,
    pub functional_area: Option<String>,
    pub location: String,
    pub classroom_number: u32,
    pub group_type: GroupType,

    // Capacity
    pub max_attendees: u32,
    pub user_count: usize,
    pub user_range: String,
    pub attendee_ids: Vec<String>,
}

impl Session {
    /// Classroom this session occupies, as used for double-booking checks.
    pub fn classroom_key(&self) -> String {
        format!("{}-{}", self.location, self.classroom_number)
    }

    /// One-line description used in conflict reports.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} - {})",
            self.title,
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// A contiguous, capacity-bounded slice of a learner list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SessionGroup<T> {
    /// 1-based cohort number
    pub session_number: u32,
    pub users: Vec<T>,
    pub user_count: usize,
    /// 1-based inclusive position range within the source list, e.g. "11-20"
    pub user_range: String,
}
