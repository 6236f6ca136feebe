//! Time block configuration
//!
//! Turns raw criteria into one or two ordered daily time windows plus the set of
//! permitted weekdays. The configuration is built once per scheduling run, never
//! mutated, and read by every split of that run.
//!
//! Block inclusion rules:
//! - Block 1 (morning) is included when the preference is `both` or `am_only` and
//!   both AM times are present and well-formed.
//! - Block 2 (afternoon) is included when the preference is `both` or `pm_only` and
//!   both PM times are present and well-formed.
//! - A block with malformed times is skipped with a warning. Skipping every block
//!   is fatal.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::schema::SchedulingCriteria;
use crate::types::{TimeBlock, ValidationReport, Warning};
use crate::{Result, SchedulingError};

/// Id of the morning block.
pub const MORNING_BLOCK_ID: u8 = 1;
/// Id of the afternoon block.
pub const AFTERNOON_BLOCK_ID: u8 = 2;

/// Blocks shorter than this many hours produce a warning.
const SHORT_BLOCK_HOURS: f64 = 1.0;

/// Tolerance for comparisons between decimal hour values.
pub(crate) const EPSILON: f64 = 1e-9;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Parse an `HH:MM` (or `HH:MM:SS`) string into decimal hours.
///
/// Hours must be 0-23 and minutes/seconds 0-59.
///
/// ```rust
/// use course_scheduler::blocks::time_to_hours;
///
/// assert_eq!(time_to_hours("13:30").unwrap(), 13.5);
/// assert!(time_to_hours("24:00").is_err());
/// ```
pub fn time_to_hours(s: &str) -> Result<f64> {
    parse_time("time", s).map(|(seconds, _)| seconds as f64 / SECONDS_PER_HOUR)
}

/// Parse a time field, returning seconds since midnight and the normalized text.
fn parse_time(field: &str, raw: &str) -> Result<(u32, String)> {
    let invalid = || SchedulingError::invalid_time_format(field, raw);

    let components: Vec<&str> = raw.trim().split(':').collect();
    if !(2..=3).contains(&components.len()) {
        return Err(invalid());
    }

    let mut values = [0u32; 3];
    for (index, component) in components.iter().enumerate() {
        let min_digits = if index == 0 { 1 } else { 2 };
        if component.len() < min_digits
            || component.len() > 2
            || !component.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        values[index] = component.parse().map_err(|_| invalid())?;
    }

    let [hours, minutes, seconds] = values;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid());
    }

    let normalized = if seconds == 0 {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    };

    Ok((hours * 3600 + minutes * 60 + seconds, normalized))
}

/// Build one block from its start/end fields.
fn build_block(
    id: u8,
    name: &str,
    (start_field, start_raw): (&str, &str),
    (end_field, end_raw): (&str, &str),
) -> Result<TimeBlock> {
    let (start_secs, start) = parse_time(start_field, start_raw)?;
    let (end_secs, end) = parse_time(end_field, end_raw)?;

    if end_secs <= start_secs {
        return Err(SchedulingError::invalid_time_format(end_field, end_raw));
    }

    Ok(TimeBlock {
        id,
        name: name.to_string(),
        start,
        end,
        start_hours: start_secs as f64 / SECONDS_PER_HOUR,
        end_hours: end_secs as f64 / SECONDS_PER_HOUR,
        duration: (end_secs - start_secs) as f64 / SECONDS_PER_HOUR,
    })
}

pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Ordered daily time windows and permitted weekdays for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBlockConfiguration {
    blocks: Vec<TimeBlock>,
    scheduling_days: Vec<Weekday>,
    max_daily_hours: f64,
    skipped: Vec<Warning>,
}

impl TimeBlockConfiguration {
    /// Build a configuration from criteria.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredCriteriaField` when `scheduling_preference` is absent
    /// - `InvalidWeekday` when a scheduling day name is not a weekday
    /// - `NoValidTimeBlocks` when no block survives the inclusion rules
    ///
    /// An empty day list and overlapping blocks are not rejected here; they are
    /// reported by [`validate`](Self::validate).
    pub fn from_criteria(criteria: &SchedulingCriteria) -> Result<Self> {
        let preference = criteria
            .scheduling_preference
            .ok_or_else(|| SchedulingError::missing_field("scheduling_preference"))?;

        let candidates = [
            (
                MORNING_BLOCK_ID,
                "Morning",
                preference.includes_am(),
                ("start_time_am", &criteria.start_time_am),
                ("end_time_am", &criteria.end_time_am),
            ),
            (
                AFTERNOON_BLOCK_ID,
                "Afternoon",
                preference.includes_pm(),
                ("start_time_pm", &criteria.start_time_pm),
                ("end_time_pm", &criteria.end_time_pm),
            ),
        ];

        let mut blocks = Vec::with_capacity(2);
        let mut skipped = Vec::new();

        for (id, name, enabled, (start_field, start), (end_field, end)) in candidates {
            if !enabled {
                continue;
            }

            let (Some(start_raw), Some(end_raw)) = (present(start), present(end)) else {
                debug!(block_id = id, "Time block not configured, leaving it out");
                continue;
            };

            match build_block(id, name, (start_field, start_raw), (end_field, end_raw)) {
                Ok(block) => blocks.push(block),
                Err(err) => {
                    let (field, value) = match &err {
                        SchedulingError::InvalidTimeFormat { field, value } => {
                            (field.clone(), value.clone())
                        }
                        _ => (start_field.to_string(), start_raw.to_string()),
                    };
                    warn!(block_id = id, %field, %value, "Skipping malformed time block");
                    skipped.push(Warning::SkippedTimeBlock {
                        block_id: id,
                        field,
                        value,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let scheduling_days = criteria.parsed_scheduling_days()?;

        let mut config = Self::new(blocks, scheduling_days)?;
        config.skipped = skipped;
        Ok(config)
    }

    /// Build a configuration from already-derived blocks, kept in the given order.
    pub fn new(blocks: Vec<TimeBlock>, scheduling_days: Vec<Weekday>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(SchedulingError::NoValidTimeBlocks);
        }

        // Summed in whole seconds so the daily total is exact for clock times
        let daily_seconds: i64 = blocks
            .iter()
            .map(|block| (block.duration * SECONDS_PER_HOUR).round() as i64)
            .sum();
        let max_daily_hours = daily_seconds as f64 / SECONDS_PER_HOUR;

        debug!(
            blocks = blocks.len(),
            max_daily_hours,
            days = scheduling_days.len(),
            "Built time block configuration"
        );

        Ok(Self { blocks, scheduling_days, max_daily_hours, skipped: Vec::new() })
    }

    /// Parse an `HH:MM` string into decimal hours.
    pub fn time_to_hours(s: &str) -> Result<f64> {
        time_to_hours(s)
    }

    /// Blocks in definition order.
    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    /// Look up a block by id.
    pub fn block(&self, block_id: u8) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.id == block_id)
    }

    /// Permitted weekdays.
    pub fn scheduling_days(&self) -> &[Weekday] {
        &self.scheduling_days
    }

    /// Sum of all block durations.
    pub fn max_daily_hours(&self) -> f64 {
        self.max_daily_hours
    }

    /// Warnings for blocks left out during construction.
    pub fn skipped_blocks(&self) -> &[Warning] {
        &self.skipped
    }

    /// First block, in definition order, long enough to hold `duration`.
    pub fn find_single_block_fit(&self, duration: f64) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.duration >= duration - EPSILON)
    }

    /// Whether `duration` fits in the blocks of a single day.
    pub fn can_fit_in_one_day(&self, duration: f64) -> bool {
        duration <= self.max_daily_hours + EPSILON
    }

    /// Number of scheduling days needed for `duration`.
    pub fn days_needed(&self, duration: f64) -> Result<u32> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SchedulingError::InvalidDuration { value: duration });
        }
        if self.max_daily_hours <= 0.0 {
            return Err(SchedulingError::NoValidTimeBlocks);
        }
        Ok((duration / self.max_daily_hours - EPSILON).ceil().max(1.0) as u32)
    }

    /// Whether sessions may be placed on `date`.
    pub fn is_scheduling_day(&self, date: NaiveDate) -> bool {
        self.scheduling_days.contains(&date.weekday())
    }

    /// First permitted date on or after `from`.
    ///
    /// Searches at most one week ahead and fails with `NoSchedulingDays` when no
    /// weekday is permitted.
    pub fn next_valid_date(&self, from: NaiveDate) -> Result<NaiveDate> {
        for offset in 0..7 {
            let candidate = from
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| SchedulingError::invalid_date("date", from.to_string()))?;
            if self.is_scheduling_day(candidate) {
                return Ok(candidate);
            }
        }
        Err(SchedulingError::NoSchedulingDays)
    }

    /// First permitted date strictly after `date`.
    pub fn following_valid_date(&self, date: NaiveDate) -> Result<NaiveDate> {
        let next = date
            .succ_opt()
            .ok_or_else(|| SchedulingError::invalid_date("date", date.to_string()))?;
        self.next_valid_date(next)
    }

    /// `date` at the start time of the given block.
    pub fn block_start(&self, date: NaiveDate, block_id: u8) -> Option<NaiveDateTime> {
        let block = self.block(block_id)?;
        Some(date.and_time(block.start_time()?))
    }

    /// Check the configuration for errors and warnings.
    ///
    /// Overlap is checked between each block and its immediate successor in
    /// definition order only.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.blocks.is_empty() {
            report.errors.push(SchedulingError::NoValidTimeBlocks);
        }

        if self.scheduling_days.is_empty() {
            report.errors.push(SchedulingError::NoSchedulingDays);
        }

        for pair in self.blocks.windows(2) {
            if pair[0].overlaps(&pair[1]) {
                report.errors.push(SchedulingError::OverlappingTimeBlocks {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }

        report.warnings.extend(self.skipped.iter().cloned());

        for block in &self.blocks {
            if block.duration < SHORT_BLOCK_HOURS {
                warn!(block = %block.name, duration = block.duration, "Time block shorter than one hour");
                report.warnings.push(Warning::ShortBlock {
                    block_name: block.name.clone(),
                    duration: block.duration,
                });
            }
        }

        report
    }

    /// Validate and fail with the first error found, returning warnings otherwise.
    pub fn ensure_valid(&self) -> Result<Vec<Warning>> {
        let mut report = self.validate();
        if report.errors.is_empty() {
            return Ok(report.warnings);
        }
        Err(report.errors.swap_remove(0))
    }
}
