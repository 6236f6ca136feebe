//! Session parts produced by the splitter

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One contiguous, dated fragment of a course's total duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SessionPart {
    /// 1-based part number
    pub part: u32,
    pub total_parts: u32,
    /// 1-based scheduling day this part falls on
    pub day: u32,
    pub total_days: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Length in hours
    pub duration: f64,
    /// Id of the time block the part was carved from
    pub block_id: u8,
    pub block_name: String,
    pub title: String,
    pub session_id: String,
}
