//! Scheduling criteria
//!
//! Criteria are supplied by the surrounding application. Every field is optional
//! at the type level so that validation can report all missing fields at once
//! instead of failing on the first one.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::GroupType;
use crate::{Result, SchedulingError};

/// Which daily time blocks the criteria enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum SchedulingPreference {
    /// Morning and afternoon blocks
    Both,
    /// Morning block only
    AmOnly,
    /// Afternoon block only
    PmOnly,
}

impl SchedulingPreference {
    /// Whether block 1 (the morning window) is enabled.
    pub fn includes_am(self) -> bool {
        matches!(self, SchedulingPreference::Both | SchedulingPreference::AmOnly)
    }

    /// Whether block 2 (the afternoon window) is enabled.
    pub fn includes_pm(self) -> bool {
        matches!(self, SchedulingPreference::Both | SchedulingPreference::PmOnly)
    }
}

/// Caller-supplied configuration driving one scheduling run.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct SchedulingCriteria {
    /// First date sessions may be placed on (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Cohort capacity
    pub max_attendees: Option<i64>,
    pub scheduling_preference: Option<SchedulingPreference>,
    pub start_time_am: Option<String>,
    pub end_time_am: Option<String>,
    pub start_time_pm: Option<String>,
    pub end_time_pm: Option<String>,
    /// Permitted weekday names, e.g. "Monday"
    pub scheduling_days: Option<Vec<String>>,
    /// Learner grouping key
    pub group_by: GroupType,
}

impl SchedulingCriteria {
    /// Parse criteria from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            SchedulingError::parse_error("SchedulingCriteria deserialization", e.to_string())
        })
    }

    /// Parse `start_date`.
    pub fn parsed_start_date(&self) -> Result<NaiveDate> {
        let raw = self.start_date.as_deref().ok_or_else(|| SchedulingError::missing_field("start_date"))?;
        parse_date("start_date", raw)
    }

    /// Parse `scheduling_days` into weekdays, preserving input order and
    /// dropping duplicates.
    ///
    /// A missing list parses as empty; emptiness is reported by validation.
    pub fn parsed_scheduling_days(&self) -> Result<Vec<Weekday>> {
        let mut days = Vec::new();
        for name in self.scheduling_days.iter().flatten() {
            let day = name
                .trim()
                .parse::<Weekday>()
                .map_err(|_| SchedulingError::InvalidWeekday { value: name.clone() })?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(days)
    }

    /// Validated cohort capacity.
    pub fn capacity(&self) -> Result<u32> {
        let value = self.max_attendees.ok_or_else(|| SchedulingError::missing_field("max_attendees"))?;
        u32::try_from(value)
            .ok()
            .filter(|capacity| *capacity >= 1)
            .ok_or(SchedulingError::InvalidCapacity { value })
    }
}

/// Parse an ISO date, accepting a trailing time component as databases often
/// return timestamps for date columns.
pub(crate) fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| SchedulingError::invalid_date(field, raw))
}
