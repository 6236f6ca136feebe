//! Course records

use serde::{Deserialize, Serialize};

/// Priority assigned to courses that do not carry one (lowest).
pub const DEFAULT_PRIORITY: u32 = 999;

/// A course to be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    /// Total duration in hours
    pub duration_hrs: f64,
    /// Lower values are scheduled first
    #[serde(default)]
    pub priority: Option<u32>,
}

impl Course {
    pub fn new(course_id: impl Into<String>, course_name: impl Into<String>, duration_hrs: f64) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            duration_hrs,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for ordering, treating a missing value as lowest.
    pub fn effective_priority(&self) -> u32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
