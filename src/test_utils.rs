//! Shared fixtures for unit tests, integration tests and benches
//!
//! The standard configuration mirrors a common plant training calendar: a
//! 08:00-12:00 morning block, a 13:00-17:00 afternoon block, and sessions on
//! Monday, Wednesday and Friday starting Monday 2026-01-05.

#![cfg(any(test, feature = "benchmark"))]

use chrono::{NaiveDate, NaiveDateTime};

use crate::blocks::TimeBlockConfiguration;
use crate::schema::{Course, Learner, SchedulingCriteria, SchedulingPreference};
use crate::splitter::SessionSplitter;
use crate::types::{GroupType, Session};

/// Monday 2026-01-05, the start date of the standard criteria.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).expect("fixture date is valid")
}

/// Criteria with both blocks (4h each), capacity 10 and Mon/Wed/Fri sessions.
pub fn standard_criteria() -> SchedulingCriteria {
    SchedulingCriteria {
        start_date: Some("2026-01-05".to_string()),
        max_attendees: Some(10),
        scheduling_preference: Some(SchedulingPreference::Both),
        start_time_am: Some("08:00".to_string()),
        end_time_am: Some("12:00".to_string()),
        start_time_pm: Some("13:00".to_string()),
        end_time_pm: Some("17:00".to_string()),
        scheduling_days: Some(vec![
            "Monday".to_string(),
            "Wednesday".to_string(),
            "Friday".to_string(),
        ]),
        group_by: GroupType::Location,
    }
}

/// Time block configuration built from [`standard_criteria`].
pub fn standard_config() -> TimeBlockConfiguration {
    TimeBlockConfiguration::from_criteria(&standard_criteria()).expect("standard criteria are valid")
}

/// Splitter over [`standard_config`].
pub fn standard_splitter() -> SessionSplitter {
    SessionSplitter::new(standard_config()).expect("standard configuration is valid")
}

/// `count` learners at `location`, with ids `"{location}-1"` onwards.
pub fn learners_at(location: &str, count: usize) -> Vec<Learner> {
    (1..=count)
        .map(|i| Learner::new(format!("{}-{}", location, i), location))
        .collect()
}

/// Three courses given out of priority order; First Aid has no priority.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::new("C-3", "First Aid", 6.0),
        Course::new("C-2", "Safety Basics", 3.0).with_priority(2),
        Course::new("C-1", "Forklift", 10.0).with_priority(1),
    ]
}

/// A minimal session in classroom `(location, classroom)` starting at `start`
/// (`"YYYY-MM-DD HH:MM"`) and lasting `hours`.
pub fn session_at(location: &str, classroom: u32, start: &str, hours: f64) -> Session {
    let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").expect("fixture timestamp is valid");
    let end = start + chrono::TimeDelta::minutes((hours * 60.0).round() as i64);

    Session {
        course_id: "C-1".to_string(),
        course_name: "Fixture".to_string(),
        duration_hrs: hours,
        priority: None,
        title: format!("Fixture {}", start.format("%H:%M")),
        session_id: format!("fixture-{}", start.format("%Y%m%d%H%M")),
        part: 1,
        total_parts: 1,
        day: 1,
        total_days: 1,
        start,
        end,
        duration: hours,
        block_id: 1,
        block_name: "Morning".to_string(),
        group_name: location.to_string(),
        functional_area: None,
        location: location.to_string(),
        classroom_number: classroom,
        group_type: GroupType::Location,
        max_attendees: 10,
        user_count: 1,
        user_range: "1-1".to_string(),
        attendee_ids: Vec::new(),
    }
}

/// `count` sessions spread over `classrooms` rooms, back to back within each
/// room, for validation benches.
pub fn back_to_back_sessions(count: usize, classrooms: u32) -> Vec<Session> {
    let classrooms = classrooms.max(1);
    (0..count)
        .map(|i| {
            let room = (i as u32 % classrooms) + 1;
            let slot = i as u32 / classrooms;
            let date = monday() + chrono::Days::new(u64::from(slot / 8));
            let hour = 8 + slot % 8;
            let start = format!("{} {:02}:00", date.format("%Y-%m-%d"), hour);
            session_at("Plant A", room, &start, 1.0)
        })
        .collect()
}
