//! Validation reports, conflicts and advisory warnings

use serde::{Deserialize, Serialize};

use crate::SchedulingError;

/// Kind of double-booking found by schedule validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    TimeOverlap,
}

/// Two adjacent sessions in one classroom whose intervals overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub classroom_key: String,
    pub session1: String,
    pub session2: String,
}

/// Advisory finding that never blocks execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Warning {
    /// An assembled session shorter than half an hour
    ShortSession { session_title: String, duration: f64 },
    /// A configured time block shorter than one hour
    ShortBlock { block_name: String, duration: f64 },
    /// A block whose times were present but malformed, so it was left out
    SkippedTimeBlock { block_id: u8, field: String, value: String, reason: String },
    /// A requested duration above the daily ceiling was clipped
    DurationClamped { requested: f64, clamped: f64 },
    /// A generated part shorter than half an hour
    ShortPart { part: u32, duration: f64 },
    /// The part estimate and the generator disagree
    PartCountMismatch { estimated: u32, generated: u32 },
    /// The strategy's day count and the generated parts disagree
    DayCountMismatch { estimated: u32, generated: u32 },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::ShortSession { session_title, duration } => {
                write!(f, "Session '{}' is only {} hours long", session_title, duration)
            }
            Warning::ShortBlock { block_name, duration } => {
                write!(f, "Time block '{}' is shorter than one hour ({} hours)", block_name, duration)
            }
            Warning::SkippedTimeBlock { block_id, field, value, reason } => {
                write!(f, "Skipped time block {}: {} = '{}' ({})", block_id, field, value, reason)
            }
            Warning::DurationClamped { requested, clamped } => {
                write!(f, "Duration {} hours clamped to {} hours", requested, clamped)
            }
            Warning::ShortPart { part, duration } => {
                write!(f, "Part {} is only {} hours long", part, duration)
            }
            Warning::PartCountMismatch { estimated, generated } => {
                write!(f, "Estimated {} parts but generated {}", estimated, generated)
            }
            Warning::DayCountMismatch { estimated, generated } => {
                write!(f, "Strategy expects {} days but parts span {}", estimated, generated)
            }
        }
    }
}

/// Errors and warnings collected by a validation pass.
///
/// Checks never short-circuit: every applicable check runs and all findings are
/// reported together.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<SchedulingError>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, failing with the single error or an aggregate
    /// of all errors when there are several.
    pub fn into_result(mut self) -> crate::Result<Vec<Warning>> {
        match self.errors.len() {
            0 => Ok(self.warnings),
            1 => Err(self.errors.remove(0)),
            _ => Err(SchedulingError::InvalidCriteria(self.errors)),
        }
    }
}

/// Outcome of checking an assembled schedule for double-booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ScheduleValidation {
    pub is_valid: bool,
    pub conflicts: Vec<Conflict>,
    pub warnings: Vec<Warning>,
    pub total_sessions: usize,
    pub total_classrooms: usize,
}
