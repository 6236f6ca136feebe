//! Fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use course_scheduler::{
    GroupType, SchedulingCriteria, SchedulingPreference, Session, SessionSplitter,
    TimeBlockConfiguration,
};

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date")
}

/// 08:00-12:00 and 13:00-17:00 on Monday, Wednesday and Friday.
pub fn standard_criteria() -> SchedulingCriteria {
    SchedulingCriteria {
        start_date: Some("2026-01-05".to_string()),
        max_attendees: Some(10),
        scheduling_preference: Some(SchedulingPreference::Both),
        start_time_am: Some("08:00".to_string()),
        end_time_am: Some("12:00".to_string()),
        start_time_pm: Some("13:00".to_string()),
        end_time_pm: Some("17:00".to_string()),
        scheduling_days: Some(vec!["Monday".into(), "Wednesday".into(), "Friday".into()]),
        group_by: GroupType::Location,
    }
}

pub fn standard_config() -> TimeBlockConfiguration {
    TimeBlockConfiguration::from_criteria(&standard_criteria()).expect("valid criteria")
}

pub fn standard_splitter() -> SessionSplitter {
    SessionSplitter::new(standard_config()).expect("valid configuration")
}

/// Session in classroom `(location, classroom)` starting at `"YYYY-MM-DD HH:MM"`.
pub fn session_at(location: &str, classroom: u32, start: &str, hours: f64) -> Session {
    let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").expect("valid timestamp");
    let end = start + TimeDelta::minutes((hours * 60.0).round() as i64);

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
