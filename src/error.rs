//! Error types for the scheduling engine.
//!
//! All failures surfaced by the engine are variants of [`SchedulingError`].
//! They fall into two families:
//!
//! - **Configuration errors**: malformed or incomplete criteria and time block
//!   definitions. These are detected before any splitting happens and are
//!   always fatal to the run that discovered them.
//! - **Generation errors**: a generated split that breaks a hard invariant
//!   (duration above the daily ceiling, a course spanning too many days, gaps
//!   in part numbering).
//!
//! Merely unusual but well-defined situations (a 20 minute session, a course
//! clipped to 24 hours) are never errors; they are reported as
//! [`Warning`](crate::types::Warning)s instead.
//!
//! ```rust
//! use course_scheduler::SchedulingError;
//!
//! let error = SchedulingError::invalid_time_format("start_time_am", "25:00");
//! assert!(error.is_configuration_error());
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

/// Result type alias for scheduling operations.
pub type Result<T, E = SchedulingError> = std::result::Result<T, E>;

/// Main error type for scheduling operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchedulingError {
    #[error("Invalid time format for {field}: '{value}' (expected HH:MM)")]
    InvalidTimeFormat { field: String, value: String },

    #[error("No valid time blocks configured")]
    NoValidTimeBlocks,

    #[error("Time blocks overlap: '{first}' ends after '{second}' starts")]
    OverlappingTimeBlocks { first: String, second: String },

    #[error("No scheduling days configured")]
    NoSchedulingDays,

    #[error("Invalid duration: {value} hours (must be greater than 0)")]
    InvalidDuration { value: f64 },

    #[error("Missing required criteria field: {field}")]
    MissingRequiredCriteriaField { field: String },

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("Invalid weekday name: '{value}'")]
    InvalidWeekday { value: String },

    #[error("Invalid max_attendees: {value} (must be at least 1)")]
    InvalidCapacity { value: i64 },

    #[error("Invalid part sequence: {details}")]
    InvalidPartSequence { details: String },

    #[error("Total duration {total} hours exceeds the {limit} hour limit")]
    DurationExceeded { total: f64, limit: f64 },

    #[error("Course spans {days} days, more than the {limit} day limit")]
    CourseSpanExceeded { days: u32, limit: u32 },

    #[error("Criteria validation failed with {} error(s)", .0.len())]
    InvalidCriteria(Vec<SchedulingError>),

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },
}

impl SchedulingError {
    /// Returns whether this error belongs to the configuration family.
    ///
    /// Configuration errors are found before splitting starts; everything
    /// else is raised while checking generated output.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            SchedulingError::InvalidTimeFormat { .. }
            | SchedulingError::NoValidTimeBlocks
            | SchedulingError::OverlappingTimeBlocks { .. }
            | SchedulingError::NoSchedulingDays
            | SchedulingError::MissingRequiredCriteriaField { .. }
            | SchedulingError::InvalidDate { .. }
            | SchedulingError::InvalidWeekday { .. }
            | SchedulingError::InvalidCapacity { .. }
            | SchedulingError::InvalidCriteria(_)
            | SchedulingError::Parse { .. } => true,
            SchedulingError::InvalidDuration { .. }
            | SchedulingError::InvalidPartSequence { .. }
            | SchedulingError::DurationExceeded { .. }
            | SchedulingError::CourseSpanExceeded { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SchedulingError::InvalidTimeFormat { .. } => vec![
                "Use 24-hour HH:MM times such as 08:00 or 13:30",
                "Make sure each block ends strictly after it starts",
            ],
            SchedulingError::NoValidTimeBlocks => vec![
                "Provide start and end times for the AM or PM block",
                "Check that the scheduling preference matches the blocks provided",
            ],
            SchedulingError::OverlappingTimeBlocks { .. } => vec![
                "Move the second block so it starts after the first one ends",
                "Define the morning block before the afternoon block",
            ],
            SchedulingError::NoSchedulingDays => {
                vec!["Select at least one weekday in scheduling_days"]
            }
            SchedulingError::InvalidDuration { .. } => {
                vec!["Set the course duration to a positive number of hours"]
            }
            SchedulingError::MissingRequiredCriteriaField { .. } => vec![
                "Fill in the missing criteria field",
                "Apply defaults before handing criteria to the scheduler",
            ],
            SchedulingError::InvalidDate { .. } => {
                vec!["Use ISO dates such as 2026-01-05"]
            }
            SchedulingError::InvalidWeekday { .. } => {
                vec!["Use full English weekday names such as Monday"]
            }
            SchedulingError::InvalidCapacity { .. } => {
                vec!["Set max_attendees to a whole number of at least 1"]
            }
            SchedulingError::InvalidPartSequence { .. } => {
                vec!["Regenerate the split from a valid time block configuration"]
            }
            SchedulingError::DurationExceeded { .. } => {
                vec!["Split the course into several shorter courses"]
            }
            SchedulingError::CourseSpanExceeded { .. } => vec![
                "Widen the daily time blocks so the course fits in fewer days",
                "Split the course into several shorter courses",
            ],
            SchedulingError::InvalidCriteria(_) => {
                vec!["Fix every listed criteria error and try again"]
            }
            SchedulingError::Parse { .. } => vec![
                "Check the YAML document structure",
                "Verify field names and value types",
            ],
        }
    }

    /// Helper constructor for malformed time strings.
    pub fn invalid_time_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        SchedulingError::InvalidTimeFormat { field: field.into(), value: value.into() }
    }

    /// Helper constructor for a missing criteria field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        SchedulingError::MissingRequiredCriteriaField { field: field.into() }
    }

    /// Helper constructor for malformed dates.
    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        SchedulingError::InvalidDate { field: field.into(), value: value.into() }
    }

    /// Helper constructor for YAML and other parse failures.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        SchedulingError::Parse { context: context.into(), details: details.into() }
    }
}
