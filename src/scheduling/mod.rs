//! # Scheduling Core
//!
//! Turns split course parts into the flat [`Session`] records consumers store and
//! display, and checks the inputs and outputs around that step:
//!
//! - [`validate_criteria`] checks raw criteria completeness before any splitting
//! - [`sort_courses_by_priority`] orders courses for placement
//! - [`group_learners_by_key`] and [`group_learners_into_cohorts`] build cohorts
//! - [`build_session`] combines one part with course and cohort metadata
//! - [`validate_schedule`] reports classroom double-booking
//!
//! Every function here is pure; nothing touches I/O or shared state.

mod cohort;
mod conflicts;

pub use cohort::{LearnerGroup, group_learners_by_key, group_learners_into_cohorts, sessions_needed};
pub use conflicts::{SHORT_SESSION_HOURS, validate_schedule};

use crate::SchedulingError;
use crate::blocks::present;
use crate::schema::{Course, SchedulingCriteria, SchedulingPreference, parse_date};
use crate::types::{GroupType, Session, SessionPart, ValidationReport};

/// Cohort, location and capacity fields attached to every part of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionOptions {
    pub group_name: String,
    pub functional_area: Option<String>,
    pub location: String,
    pub classroom_number: u32,
    pub group_type: GroupType,
    pub max_attendees: u32,
    pub user_count: usize,
    pub user_range: String,
    pub attendee_ids: Vec<String>,
}

/// Combine a session part with course and cohort metadata.
pub fn build_session(part: &SessionPart, course: &Course, options: &SessionOptions) -> Session {
    Session {
        course_id: course.course_id.clone(),
        course_name: course.course_name.clone(),
        duration_hrs: course.duration_hrs,
        priority: course.priority,

        title: part.title.clone(),
        session_id: part.session_id.clone(),
        part: part.part,
        total_parts: part.total_parts,
        day: part.day,
        total_days: part.total_days,
        start: part.start,
        end: part.end,
        duration: part.duration,
        block_id: part.block_id,
        block_name: part.block_name.clone(),

        group_name: options.group_name.clone(),
        functional_area: options.functional_area.clone(),
        location: options.location.clone(),
        classroom_number: options.classroom_number,
        group_type: options.group_type,

        max_attendees: options.max_attendees,
        user_count: options.user_count,
        user_range: options.user_range.clone(),
        attendee_ids: options.attendee_ids.clone(),
    }
}

/// Check criteria for completeness and well-formedness.
///
/// Every check runs; all failures are collected into the report rather than
/// stopping at the first one. Time fields are only required for the blocks the
/// preference enables, and with `both` one complete pair is enough.
pub fn validate_criteria(criteria: &SchedulingCriteria) -> ValidationReport {
    let mut report = ValidationReport::new();

    match present(&criteria.start_date) {
        None => report.errors.push(SchedulingError::missing_field("start_date")),
        Some(raw) => {
            if let Err(err) = parse_date("start_date", raw) {
                report.errors.push(err);
            }
        }
    }

    if let Err(err) = criteria.capacity() {
        report.errors.push(err);
    }

    match &criteria.scheduling_days {
        None => report.errors.push(SchedulingError::missing_field("scheduling_days")),
        Some(days) if days.is_empty() => report.errors.push(SchedulingError::NoSchedulingDays),
        Some(_) => {
            if let Err(err) = criteria.parsed_scheduling_days() {
                report.errors.push(err);
            }
        }
    }

    let Some(preference) = criteria.scheduling_preference else {
        report.errors.push(SchedulingError::missing_field("scheduling_preference"));
        return report;
    };

    let am = [
        ("start_time_am", present(&criteria.start_time_am)),
        ("end_time_am", present(&criteria.end_time_am)),
    ];
    let pm = [
        ("start_time_pm", present(&criteria.start_time_pm)),
        ("end_time_pm", present(&criteria.end_time_pm)),
    ];

    let required: Vec<&[(&str, Option<&str>); 2]> = match preference {
        SchedulingPreference::AmOnly => vec![&am],
        SchedulingPreference::PmOnly => vec![&pm],
        SchedulingPreference::Both if complete(&am) || complete(&pm) => Vec::new(),
        SchedulingPreference::Both => vec![&am, &pm],
    };

    for pair in required {
        for (field, value) in pair {
            if value.is_none() {
                report.errors.push(SchedulingError::missing_field(*field));
            }
        }
    }

    report
}

fn complete(pair: &[(&str, Option<&str>)]) -> bool {
    pair.iter().all(|(_, value)| value.is_some())
}

/// Order courses by ascending priority, missing priority last.
///
/// The sort is stable, so courses with equal priority keep their input order.
pub fn sort_courses_by_priority(courses: &[Course]) -> Vec<&Course> {
    let mut sorted: Vec<&Course> = courses.iter().collect();
    sorted.sort_by_key(|course| course.effective_priority());
    sorted
}
