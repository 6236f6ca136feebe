//! # Input Data Contracts
//!
//! The engine is a library boundary: the surrounding application produces
//! criteria, courses and learners and consumes the resulting sessions. This
//! module holds those input records.
//!
//! All records are plain serde types, so they can come from a database layer
//! directly or be loaded from a YAML document:
//!
//! ```text
//! criteria:
//!   start_date: "2026-01-05"
//!   max_attendees: 10
//!   scheduling_preference: both
//!   start_time_am: "08:00"
//!   end_time_am: "12:00"
//!   start_time_pm: "13:00"
//!   end_time_pm: "17:00"
//!   scheduling_days: [Monday, Wednesday, Friday]
//! courses:
//!   - { course_id: "C-1", course_name: "Safety Basics", duration_hrs: 6, priority: 1 }
//! learners:
//!   - { id: "L-1", training_location: "Plant A" }
//! ```
//!
//! Missing fields are not defaulted here beyond what the document omits
//! entirely; checking criteria completeness is the job of
//! [`validate_criteria`](crate::scheduling::validate_criteria).

use serde::{Deserialize, Serialize};

pub mod course;
pub mod criteria;
pub mod learner;

pub use course::{Course, DEFAULT_PRIORITY};
pub use criteria::{SchedulingCriteria, SchedulingPreference};
pub use learner::Learner;

pub(crate) use criteria::parse_date;

/// Complete input for one scheduling run.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct ScheduleRequest {
    pub criteria: SchedulingCriteria,
    pub courses: Vec<Course>,
    pub learners: Vec<Learner>,
}

impl ScheduleRequest {
    /// Parse a scheduling request from a YAML document.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        if yaml.trim().is_empty() {
            return Err(crate::SchedulingError::parse_error(
                "ScheduleRequest deserialization",
                "YAML document is empty",
            ));
        }

        serde_yaml_ng::from_str(yaml).map_err(|e| {
            crate::SchedulingError::parse_error("ScheduleRequest deserialization", e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchedulingError;

    const REQUEST_YAML: &str = r#"
criteria:
  start_date: "2026-01-05"
  max_attendees: 10
  scheduling_preference: am_only
  start_time_am: "08:00"
  end_time_am: "12:00"
  scheduling_days: [Monday]
  group_by: location_and_functional_area
courses:
  - course_id: "C-1"
    course_name: "Safety Basics"
    duration_hrs: 3
  - course_id: "C-2"
    course_name: "Forklift"
    duration_hrs: 8
    priority: 1
learners:
  - id: "L-1"
    training_location: "Plant A"
    functional_area: "Logistics"
  - id: "L-2"
    name: "Ana"
    training_location: "Plant B"
"#;

    #[test]
    fn parses_complete_request() {
        let request = ScheduleRequest::from_yaml(REQUEST_YAML).unwrap();
        assert_eq!(request.courses.len(), 2);
        assert_eq!(request.courses[0].priority, None);
        assert_eq!(request.courses[0].effective_priority(), DEFAULT_PRIORITY);
        assert_eq!(request.courses[1].effective_priority(), 1);
        assert_eq!(request.learners[0].functional_area.as_deref(), Some("Logistics"));
        assert_eq!(request.learners[1].functional_area, None);
        assert_eq!(
            request.criteria.scheduling_preference,
            Some(SchedulingPreference::AmOnly)
        );
        assert_eq!(
            request.criteria.group_by,
            crate::types::GroupType::LocationAndFunctionalArea
        );
    }

    #[test]
    fn empty_document_is_rejected() {
        let result = ScheduleRequest::from_yaml("   \n");
        assert!(matches!(result, Err(SchedulingError::Parse { .. })));
    }

    #[test]
    fn malformed_course_is_a_parse_error() {
        let yaml = "courses:\n  - course_id: \"C-1\"\n    duration_hrs: lots\n";
        match ScheduleRequest::from_yaml(yaml) {
            Err(SchedulingError::Parse { context, .. }) => {
                assert_eq!(context, "ScheduleRequest deserialization")
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
