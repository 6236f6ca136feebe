//! Deterministic training-session scheduling engine.
//!
//! Course Scheduler decomposes course durations into dated, time-bounded session
//! parts against one or two daily time blocks, assigns learners to
//! capacity-bounded cohorts, and checks the assembled schedule for classroom
//! double-booking.
//!
//! # Features
//!
//! - **Time blocks**: morning/afternoon windows parsed and validated from criteria
//! - **Splitting**: single-block, same-day and multi-day strategies
//! - **Cohorts**: learners grouped by location (and optionally functional area)
//! - **Validation**: aggregated criteria checks and per-classroom conflict detection
//!
//! The engine is synchronous and pure. It performs no I/O; inputs come from the
//! caller (or a YAML document) and the output is a list of [`Session`] records.
//!
//! # Quick Start
//!
//! ```rust
//! use course_scheduler::{Course, CourseScheduler, Learner, SchedulingCriteria, SchedulingPreference};
//!
//! let criteria = SchedulingCriteria {
//!     start_date: Some("2026-01-05".to_string()),
//!     max_attendees: Some(10),
//!     scheduling_preference: Some(SchedulingPreference::Both),
//!     start_time_am: Some("08:00".to_string()),
//!     end_time_am: Some("12:00".to_string()),
//!     start_time_pm: Some("13:00".to_string()),
//!     end_time_pm: Some("17:00".to_string()),
//!     scheduling_days: Some(vec!["Monday".into(), "Wednesday".into(), "Friday".into()]),
//!     ..Default::default()
//! };
//!
//! let scheduler = CourseScheduler::new(&criteria)?;
//! let courses = vec![Course::new("C-1", "Safety Basics", 10.0)];
//! let learners: Vec<Learner> = (1..=12).map(|i| Learner::new(format!("L-{i}"), "Plant A")).collect();
//!
//! let sessions = scheduler.generate(&courses, &learners)?;
//! // Two cohorts, three parts each
//! assert_eq!(sessions.len(), 6);
//! assert!(scheduler.validate(&sessions).is_valid);
//! # Ok::<(), course_scheduler::SchedulingError>(())
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Input contracts
pub mod schema;

// Engine components
pub mod blocks;
pub mod scheduling;
pub mod splitter;

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};

// Core exports
pub use error::*;
pub use types::*;

// Component exports
pub use blocks::TimeBlockConfiguration;
pub use schema::{Course, Learner, ScheduleRequest, SchedulingCriteria, SchedulingPreference};
pub use scheduling::{SessionOptions, build_session, validate_criteria, validate_schedule};
pub use splitter::{SessionSplitter, SplitPlan, SplitRequest};

/// Entry point that runs the full scheduling pipeline for one set of criteria.
///
/// Construction validates the criteria and the derived time block configuration
/// once; the scheduler is then immutable and can generate schedules for any
/// number of course and learner lists.
///
/// # Examples
///
/// ```rust
/// use course_scheduler::CourseScheduler;
///
/// let scheduler = CourseScheduler::from_yaml(r#"
/// start_date: "2026-01-05"
/// max_attendees: 8
/// scheduling_preference: am_only
/// start_time_am: "09:00"
/// end_time_am: "12:00"
/// scheduling_days: [Tuesday, Thursday]
/// "#)?;
/// assert_eq!(scheduler.config().max_daily_hours(), 3.0);
/// # Ok::<(), course_scheduler::SchedulingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CourseScheduler {
    splitter: SessionSplitter,
    start_date: NaiveDate,
    max_attendees: u32,
    group_type: GroupType,
    warnings: Vec<Warning>,
}

impl CourseScheduler {
    /// Validate `criteria` and build the scheduler.
    ///
    /// # Errors
    ///
    /// Returns the single criteria error, or `InvalidCriteria` carrying every
    /// failure when several checks fail. Configuration errors (no usable time
    /// block, overlapping blocks) are returned as found.
    pub fn new(criteria: &SchedulingCriteria) -> Result<Self> {
        let mut warnings = validate_criteria(criteria).into_result()?;

        let config = TimeBlockConfiguration::from_criteria(criteria)?;
        warnings.extend(config.ensure_valid()?);

        let scheduler = Self {
            start_date: criteria.parsed_start_date()?,
            max_attendees: criteria.capacity()?,
            group_type: criteria.group_by,
            splitter: SessionSplitter::new(config)?,
            warnings,
        };

        debug!(
            start_date = %scheduler.start_date,
            max_attendees = scheduler.max_attendees,
            group_by = scheduler.group_type.as_str(),
            blocks = scheduler.config().blocks().len(),
            "Course scheduler ready"
        );

        Ok(scheduler)
    }

    /// Build a scheduler from criteria in a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::new(&SchedulingCriteria::from_yaml(yaml)?)
    }

    /// The validated time block configuration.
    pub fn config(&self) -> &TimeBlockConfiguration {
        self.splitter.config()
    }

    /// The splitter used for every course.
    pub fn splitter(&self) -> &SessionSplitter {
        &self.splitter
    }

    /// Advisory warnings found while validating criteria and configuration.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Generate sessions for every course and learner cohort.
    ///
    /// Split warnings are logged and dropped; use
    /// [`generate_report`](Self::generate_report) to keep them.
    ///
    /// # Errors
    ///
    /// Fails on the first course whose duration cannot be split.
    pub fn generate(&self, courses: &[Course], learners: &[Learner]) -> Result<Vec<Session>> {
        self.generate_report(courses, learners).map(|schedule| schedule.sessions)
    }

    /// Generate sessions along with the advisory warnings raised while splitting.
    ///
    /// Courses are placed in priority order, one after another: each course
    /// starts on the first permitted date after the last date used by the
    /// previous one. Learners are grouped by the configured key and sliced into
    /// cohorts; every cohort gets its own classroom within its location, and all
    /// cohorts take a course on the same dates.
    ///
    /// # Errors
    ///
    /// Fails on the first course whose duration cannot be split.
    pub fn generate_report(&self, courses: &[Course], learners: &[Learner]) -> Result<GeneratedSchedule> {
        let cohorts = self.assign_cohorts(learners)?;
        let mut sessions = Vec::new();
        let mut warnings: Vec<Warning> = Vec::new();
        let mut course_start = self.start_date;

        for course in scheduling::sort_courses_by_priority(courses) {
            let mut last_date: Option<NaiveDate> = None;

            for (template, session_number) in &cohorts {
                let request = SplitRequest::new(&course.course_name, *session_number, course_start);
                let plan = self.splitter.plan(course.duration_hrs, &request)?;
                last_date = last_date.max(plan.last_date());

                // Every cohort of a course gets the same split, so keep one copy
                for warning in plan.warnings {
                    if !warnings.contains(&warning) {
                        warnings.push(warning);
                    }
                }

                sessions.extend(plan.parts.iter().map(|part| build_session(part, course, template)));
            }

            debug!(
                course = %course.course_name,
                priority = course.effective_priority(),
                start = %course_start,
                cohorts = cohorts.len(),
                "Course placed"
            );

            if let Some(last) = last_date {
                course_start = self.config().following_valid_date(last)?;
            }
        }

        info!(
            courses = courses.len(),
            learners = learners.len(),
            cohorts = cohorts.len(),
            sessions = sessions.len(),
            warnings = warnings.len(),
            "Schedule generated"
        );

        Ok(GeneratedSchedule { sessions, warnings })
    }

    /// Check generated sessions for classroom double-booking.
    pub fn validate(&self, sessions: &[Session]) -> ScheduleValidation {
        validate_schedule(sessions)
    }

    /// Group learners, slice each group into cohorts and number classrooms per
    /// location.
    fn assign_cohorts(&self, learners: &[Learner]) -> Result<Vec<(SessionOptions, u32)>> {
        let mut classrooms: HashMap<String, u32> = HashMap::new();
        let mut cohorts = Vec::new();

        for group in scheduling::group_learners_by_key(learners, self.group_type) {
            let group_name = group.name();
            for cohort in scheduling::group_learners_into_cohorts(&group.learners, self.max_attendees)? {
                let classroom = classrooms.entry(group.location.clone()).or_insert(0);
                *classroom += 1;

                let options = SessionOptions {
                    group_name: group_name.clone(),
                    functional_area: group.functional_area.clone(),
                    location: group.location.clone(),
                    classroom_number: *classroom,
                    group_type: self.group_type,
                    max_attendees: self.max_attendees,
                    user_count: cohort.user_count,
                    user_range: cohort.user_range,
                    attendee_ids: cohort.users.iter().map(|learner| learner.id.clone()).collect(),
                };
                cohorts.push((options, cohort.session_number));
            }
        }

        Ok(cohorts)
    }
}
