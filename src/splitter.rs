//! Course splitting
//!
//! Decomposes a course duration into dated, time-bounded session parts using one
//! of three strategies, evaluated in priority order:
//!
//! 1. **Single block**: some block is at least as long as the course. One part is
//!    placed at that block's start on the first permitted date.
//! 2. **Same-day split**: the course fits in one day's blocks. Parts are carved
//!    block by block in definition order, each taking what remains up to the
//!    block's length.
//! 3. **Multi-day split**: each permitted day takes up to the daily maximum and is
//!    carved the same way; non-permitted weekdays are skipped.
//!
//! ```text
//! blocks: 08:00-12:00, 13:00-17:00       split(10)
//!
//!   day 1 (Mon)   [08:00 ==== 12:00]  [13:00 ==== 17:00]   parts 1, 2
//!   day 2 (Wed)   [08:00 = 10:00]                          part 3
//! ```
//!
//! Durations above [`MAX_COURSE_HOURS`] are clamped with a warning rather than
//! rejected.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::{debug, warn};

use crate::blocks::{EPSILON, TimeBlockConfiguration};
use crate::types::{SessionPart, SplittingStrategy, TimeBlock, ValidationReport, Warning};
use crate::{Result, SchedulingError};

/// Longest course the splitter accepts; longer requests are clamped.
pub const MAX_COURSE_HOURS: f64 = 24.0;
/// Most calendar days a single course may span.
pub const MAX_COURSE_DAYS: u32 = 3;
/// Parts shorter than this many hours produce a warning.
pub const SHORT_PART_HOURS: f64 = 0.5;

/// Identity of the cohort a split is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub course_name: String,
    /// 1-based cohort number
    pub session_number: u32,
    /// Earliest date a part may be placed on
    pub start_date: NaiveDate,
}

impl SplitRequest {
    pub fn new(course_name: impl Into<String>, session_number: u32, start_date: NaiveDate) -> Self {
        Self { course_name: course_name.into(), session_number, start_date }
    }
}

/// Result of splitting one course for one cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitPlan {
    pub strategy: SplittingStrategy,
    pub parts: Vec<SessionPart>,
    pub warnings: Vec<Warning>,
}

impl SplitPlan {
    /// Calendar date of the last part.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.parts.last().map(|part| part.start.date())
    }
}

/// A block allocation on a given day, before numbering.
struct Slot<'a> {
    day: u32,
    date: NaiveDate,
    block: &'a TimeBlock,
    hours: f64,
}

/// Splits course durations against a validated time block configuration.
///
/// The splitter only reads its configuration, so one instance can serve many
/// courses, including from several threads.
#[derive(Debug, Clone)]
pub struct SessionSplitter {
    config: TimeBlockConfiguration,
}

impl SessionSplitter {
    /// Create a splitter, validating the configuration first.
    ///
    /// # Errors
    ///
    /// Fails with the configuration's first error (no scheduling days,
    /// overlapping blocks).
    pub fn new(config: TimeBlockConfiguration) -> Result<Self> {
        for warning in config.ensure_valid()? {
            debug!(%warning, "Time block configuration warning");
        }
        Ok(Self { config })
    }

    /// The configuration parts are carved from.
    pub fn config(&self) -> &TimeBlockConfiguration {
        &self.config
    }

    /// Choose the splitting strategy for `duration`.
    ///
    /// The duration is clamped to [`MAX_COURSE_HOURS`] first.
    pub fn determine_strategy(&self, duration: f64) -> Result<SplittingStrategy> {
        let duration = normalize_duration(duration, &mut Vec::new())?;
        self.strategy_for(duration)
    }

    fn strategy_for(&self, duration: f64) -> Result<SplittingStrategy> {
        if let Some(block) = self.config.find_single_block_fit(duration) {
            return Ok(SplittingStrategy::SingleBlock { block: block.clone() });
        }

        let total_parts = self.estimate_parts(duration);
        if self.config.can_fit_in_one_day(duration) {
            return Ok(SplittingStrategy::SameDaySplit { total_parts });
        }

        let total_days = self.config.days_needed(duration)?;
        Ok(SplittingStrategy::MultiDaySplit { total_parts, total_days })
    }

    /// Estimate how many parts `duration` will be split into without generating
    /// them.
    pub fn estimate_total_parts(&self, duration: f64) -> Result<u32> {
        let duration = normalize_duration(duration, &mut Vec::new())?;
        if self.config.find_single_block_fit(duration).is_some() {
            return Ok(1);
        }
        Ok(self.estimate_parts(duration))
    }

    fn estimate_parts(&self, duration: f64) -> u32 {
        let max_daily = self.config.max_daily_hours();
        let blocks_per_day = self.config.blocks().len() as u32;

        if duration <= max_daily + EPSILON {
            return self.blocks_needed(duration);
        }

        let full_days = (duration / max_daily + EPSILON).floor();
        let remainder = duration - full_days * max_daily;
        let mut parts = full_days as u32 * blocks_per_day;
        if remainder > EPSILON {
            parts += self.blocks_needed(remainder);
        }
        parts
    }

    /// Number of blocks, in definition order, needed to hold `hours` in one day.
    fn blocks_needed(&self, hours: f64) -> u32 {
        let mut covered = 0.0;
        let mut count = 0;
        for block in self.config.blocks() {
            if covered >= hours - EPSILON {
                break;
            }
            covered += block.duration;
            count += 1;
        }
        count
    }

    /// Split `duration` hours into ordered session parts.
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` for non-positive or non-finite durations
    /// - `CourseSpanExceeded` when the course would need more than
    ///   [`MAX_COURSE_DAYS`] days
    pub fn split(&self, duration: f64, request: &SplitRequest) -> Result<Vec<SessionPart>> {
        self.plan(duration, request).map(|plan| plan.parts)
    }

    /// Split `duration` and return the chosen strategy and any warnings along with
    /// the parts.
    pub fn plan(&self, duration: f64, request: &SplitRequest) -> Result<SplitPlan> {
        let mut warnings = Vec::new();
        let duration = normalize_duration(duration, &mut warnings)?;
        let strategy = self.strategy_for(duration)?;

        debug!(
            course = %request.course_name,
            session = request.session_number,
            duration,
            strategy = strategy.describe(),
            "Splitting course"
        );

        let first_date = self.config.next_valid_date(request.start_date)?;
        let slots = match &strategy {
            SplittingStrategy::SingleBlock { block } => {
                vec![Slot { day: 1, date: first_date, block, hours: duration }]
            }
            SplittingStrategy::SameDaySplit { .. } => self.carve_day(1, first_date, duration),
            SplittingStrategy::MultiDaySplit { .. } => self.carve_days(first_date, duration)?,
        };

        let parts = materialize(&slots, request)?;

        if parts.len() as u32 != strategy.total_parts() {
            let mismatch = Warning::PartCountMismatch {
                estimated: strategy.total_parts(),
                generated: parts.len() as u32,
            };
            warn!(course = %request.course_name, %mismatch, "Part estimate disagrees with generator");
            warnings.push(mismatch);
        }

        let generated_days = parts.last().map(|part| part.total_days).unwrap_or(0);
        if generated_days != strategy.total_days() {
            let mismatch = Warning::DayCountMismatch {
                estimated: strategy.total_days(),
                generated: generated_days,
            };
            warn!(course = %request.course_name, %mismatch, "Strategy day count disagrees with generator");
            warnings.push(mismatch);
        }

        let report = Self::validate_parts(&parts);
        warnings.extend(report.warnings);
        if let Some(error) = report.errors.into_iter().next() {
            return Err(error);
        }

        Ok(SplitPlan { strategy, parts, warnings })
    }

    /// Carve one day's allocation across the blocks in definition order.
    fn carve_day(&self, day: u32, date: NaiveDate, hours: f64) -> Vec<Slot<'_>> {
        let mut remaining = hours;
        let mut slots = Vec::with_capacity(self.config.blocks().len());

        for block in self.config.blocks() {
            if remaining <= EPSILON {
                break;
            }
            let take = remaining.min(block.duration);
            slots.push(Slot { day, date, block, hours: take });
            remaining -= take;
        }

        slots
    }

    /// Spread `duration` over successive permitted days, filling each day up to
    /// the daily maximum.
    fn carve_days(&self, first_date: NaiveDate, duration: f64) -> Result<Vec<Slot<'_>>> {
        let max_daily = self.config.max_daily_hours();
        let mut slots = Vec::new();
        let mut remaining = duration;
        let mut date = first_date;
        let mut day = 1;

        loop {
            let allocation = remaining.min(max_daily);
            let day_slots = self.carve_day(day, date, allocation);
            remaining -= day_slots.iter().map(|slot| slot.hours).sum::<f64>();
            slots.extend(day_slots);

            if remaining <= EPSILON {
                break;
            }
            date = self.config.following_valid_date(date)?;
            day += 1;
        }

        Ok(slots)
    }

    /// Check generated parts for consistency.
    ///
    /// Errors: total above [`MAX_COURSE_HOURS`], a day number above
    /// [`MAX_COURSE_DAYS`], part numbers that are not exactly `1..=N`, and day
    /// numbers that do not step through `1..=total_days`. Parts shorter than
    /// [`SHORT_PART_HOURS`] produce warnings.
    pub fn validate_parts(parts: &[SessionPart]) -> ValidationReport {
        let mut report = ValidationReport::new();

        if parts.is_empty() {
            report.errors.push(SchedulingError::InvalidPartSequence {
                details: "no parts were generated".to_string(),
            });
            return report;
        }

        let total: f64 = parts.iter().map(|part| part.duration).sum();
        if total > MAX_COURSE_HOURS + EPSILON {
            report
                .errors
                .push(SchedulingError::DurationExceeded { total, limit: MAX_COURSE_HOURS });
        }

        let max_day = parts.iter().map(|part| part.day).max().unwrap_or(0);
        if max_day > MAX_COURSE_DAYS {
            report
                .errors
                .push(SchedulingError::CourseSpanExceeded { days: max_day, limit: MAX_COURSE_DAYS });
        }

        let count = parts.len() as u32;
        for (index, part) in parts.iter().enumerate() {
            let expected = index as u32 + 1;
            if part.part != expected || part.total_parts != count {
                report.errors.push(SchedulingError::InvalidPartSequence {
                    details: format!(
                        "expected part {} of {}, found part {} of {}",
                        expected, count, part.part, part.total_parts
                    ),
                });
                break;
            }
        }

        let mut previous_day = 0;
        for part in parts {
            if part.day < previous_day || part.day > previous_day + 1 || part.day == 0 {
                report.errors.push(SchedulingError::InvalidPartSequence {
                    details: format!("day {} follows day {}", part.day, previous_day),
                });
                break;
            }
            previous_day = part.day;
        }

        for part in parts {
            if part.duration < SHORT_PART_HOURS {
                warn!(part = part.part, duration = part.duration, "Session part shorter than 30 minutes");
                report.warnings.push(Warning::ShortPart { part: part.part, duration: part.duration });
            }
        }

        report
    }
}

/// Reject unusable durations and clamp long ones.
fn normalize_duration(duration: f64, warnings: &mut Vec<Warning>) -> Result<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SchedulingError::InvalidDuration { value: duration });
    }

    if duration > MAX_COURSE_HOURS {
        warn!(requested = duration, clamped = MAX_COURSE_HOURS, "Clamping course duration");
        warnings.push(Warning::DurationClamped { requested: duration, clamped: MAX_COURSE_HOURS });
        return Ok(MAX_COURSE_HOURS);
    }

    Ok(duration)
}

/// Number the slots and turn them into session parts.
fn materialize(slots: &[Slot<'_>], request: &SplitRequest) -> Result<Vec<SessionPart>> {
    let total_parts = slots.len() as u32;
    let total_days = slots.last().map(|slot| slot.day).unwrap_or(0);
    let slug = slugify(&request.course_name);

    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let part = index as u32 + 1;
            let start = slot_start(slot)?;
            let end = start + TimeDelta::milliseconds((slot.hours * 3_600_000.0).round() as i64);

            let title = if total_parts > 1 {
                format!("{} - Group {} Part {}", request.course_name, request.session_number, part)
            } else {
                format!("{} - Group {}", request.course_name, request.session_number)
            };

            Ok(SessionPart {
                part,
                total_parts,
                day: slot.day,
                total_days,
                start,
                end,
                duration: slot.hours,
                block_id: slot.block.id,
                block_name: slot.block.name.clone(),
                title,
                session_id: format!(
                    "{}-{}-{}-{}",
                    slug,
                    request.session_number,
                    part,
                    start.format("%Y%m%d%H%M")
                ),
            })
        })
        .collect()
}

fn slot_start(slot: &Slot<'_>) -> Result<NaiveDateTime> {
    let time = slot
        .block
        .start_time()
        .ok_or_else(|| SchedulingError::invalid_time_format(slot.block.name.clone(), slot.block.start.clone()))?;
    Ok(slot.date.and_time(time))
}

/// Lowercase a course name and join its alphanumeric runs with dashes.
pub fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() { "course".to_string() } else { slug }
}
