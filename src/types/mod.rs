//! Core types for scheduling data representation.
//!
//! This module provides the plain data structures that flow through the engine:
//!
//! - [`TimeBlock`] is one daily time window derived from criteria
//! - [`SplittingStrategy`] records how a duration was decomposed
//! - [`SessionPart`] is one dated fragment produced by the splitter
//! - [`Session`] is the flat record handed to persistence and UI consumers
//! - [`SessionGroup`] is a capacity-bounded cohort of learners
//! - [`ScheduleValidation`], [`Conflict`] and [`Warning`] describe validation results
//!
//! ## Usage Example
//!
//! ```rust
//! use course_scheduler::types::{SplittingStrategy, TimeBlock};
//!
//! let morning = TimeBlock {
//!     id: 1,
//!     name: "Morning".to_string(),
//!     start: "08:00".to_string(),
//!     end: "12:00".to_string(),
//!     start_hours: 8.0,
//!     end_hours: 12.0,
//!     duration: 4.0,
//! };
//!
//! let strategy = SplittingStrategy::SingleBlock { block: morning };
//! assert_eq!(strategy.total_parts(), 1);
//! assert_eq!(strategy.total_days(), 1);
//! ```

mod part;
mod session;
mod strategy;
mod time_block;
mod validation;

// Re-export all public types
pub use part::SessionPart;
pub use session::{GeneratedSchedule, GroupType, Session, SessionGroup};
pub use strategy::SplittingStrategy;
pub use time_block::TimeBlock;
pub use validation::{Conflict, ConflictKind, ScheduleValidation, ValidationReport, Warning};

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    prop_compose! {
        fn arb_time_block()(
            id in 1u8..=2u8,
            start_minutes in 0u32..(23 * 60),
            length_minutes in 1u32..(6 * 60),
        ) -> TimeBlock {
            let end_minutes = (start_minutes + length_minutes).min(23 * 60 + 59);
            let start_hours = start_minutes as f64 / 60.0;
            let end_hours = end_minutes as f64 / 60.0;
            TimeBlock {
                id,
                name: format!("Block {}", id),
                start: format!("{:02}:{:02}", start_minutes / 60, start_minutes % 60),
                end: format!("{:02}:{:02}", end_minutes / 60, end_minutes % 60),
                start_hours,
                end_hours,
                duration: end_hours - start_hours,
            }
        }
    }

    proptest! {
        #[test]
        fn prop_block_times_match_decimal_hours(block in arb_time_block()) {
            let start = block.start_time().expect("start within the day");
            let end = block.end_time().expect("end within the day");
            prop_assert_eq!(start.format("%H:%M").to_string(), block.start.clone());
            prop_assert_eq!(end.format("%H:%M").to_string(), block.end.clone());
            prop_assert!(start < end || block.duration == 0.0);
        }

        #[test]
        fn prop_overlap_is_strict(first in arb_time_block(), second in arb_time_block()) {
            let overlaps = first.overlaps(&second);
            prop_assert_eq!(overlaps, first.end_hours > second.start_hours);
        }
    }

    #[test]
    fn touching_blocks_do_not_overlap() {
        let morning = TimeBlock {
            id: 1,
            name: "Morning".to_string(),
            start: "08:00".to_string(),
            end: "12:00".to_string(),
            start_hours: 8.0,
            end_hours: 12.0,
            duration: 4.0,
        };
        let afternoon = TimeBlock {
            id: 2,
            name: "Afternoon".to_string(),
            start: "12:00".to_string(),
            end: "16:00".to_string(),
            start_hours: 12.0,
            end_hours: 16.0,
            duration: 4.0,
        };
        assert!(!morning.overlaps(&afternoon));
    }

    #[test]
    fn strategy_serializes_with_type_tag() {
        let strategy = SplittingStrategy::MultiDaySplit { total_parts: 3, total_days: 2 };
        let yaml = serde_yaml_ng::to_string(&strategy).unwrap();
        assert!(yaml.contains("type: MULTI_DAY_SPLIT"));
        assert_eq!(strategy.total_parts(), 3);
        assert_eq!(strategy.total_days(), 2);
        assert_eq!(strategy.describe(), "multi-day split");
    }

    #[test]
    fn warnings_serialize_with_type_tag() {
        let warning = Warning::ShortSession { session_title: "Intro".to_string(), duration: 0.25 };
        let yaml = serde_yaml_ng::to_string(&warning).unwrap();
        assert!(yaml.contains("type: SHORT_SESSION"));
        assert!(warning.to_string().contains("Intro"));
    }

    #[test]
    fn report_into_result_keeps_single_error_type() {
        let mut report = ValidationReport::new();
        report.errors.push(crate::SchedulingError::NoSchedulingDays);
        assert!(matches!(report.into_result(), Err(crate::SchedulingError::NoSchedulingDays)));

        let mut report = ValidationReport::new();
        report.warnings.push(Warning::DurationClamped { requested: 30.0, clamped: 24.0 });
        let warnings = report.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
