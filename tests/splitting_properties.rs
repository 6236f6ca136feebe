//! Property tests for course splitting
//!
//! Most configurations use quarter-hour aligned blocks; the minute-level
//! generator covers clock times such as 11:10 whose decimal hours are not exact
//! in binary floating point.

mod common;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use common::{monday, standard_criteria};
use course_scheduler::{
    SchedulingPreference, SessionSplitter, SplitRequest, SplittingStrategy, TimeBlockConfiguration,
    Warning,
};
use proptest::prelude::*;

const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

fn clock(quarters: u32) -> String {
    format!("{:02}:{:02}", quarters / 4, (quarters % 4) * 15)
}

prop_compose! {
    /// A morning block inside 06:00-12:00 and an afternoon block inside 12:00-20:00,
    /// each at least 30 minutes long.
    fn arb_criteria()(
        am_start in 24u32..40,
        am_len in 2u32..5,
        pm_start in 48u32..70,
        pm_len in 2u32..10,
        preference in prop_oneof![
            Just(SchedulingPreference::Both),
            Just(SchedulingPreference::AmOnly),
            Just(SchedulingPreference::PmOnly),
        ],
        days in proptest::sample::subsequence(WEEKDAYS.to_vec(), 1..=7),
    ) -> course_scheduler::SchedulingCriteria {
        let mut criteria = standard_criteria();
        criteria.scheduling_preference = Some(preference);
        criteria.start_time_am = Some(clock(am_start));
        criteria.end_time_am = Some(clock(am_start + am_len * 2));
        criteria.start_time_pm = Some(clock(pm_start));
        criteria.end_time_pm = Some(clock(pm_start + pm_len));
        criteria.scheduling_days = Some(days.into_iter().map(String::from).collect());
        criteria
    }
}

fn minute_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

prop_compose! {
    /// Both blocks enabled, with arbitrary minute-level start and end times.
    fn arb_minute_blocks()(
        am_start in 360u32..600,
        am_len in 30u32..120,
        pm_start in 720u32..960,
        pm_len in 30u32..300,
    ) -> (course_scheduler::SchedulingCriteria, u32) {
        let mut criteria = standard_criteria();
        criteria.scheduling_preference = Some(SchedulingPreference::Both);
        criteria.start_time_am = Some(minute_clock(am_start));
        criteria.end_time_am = Some(minute_clock(am_start + am_len));
        criteria.start_time_pm = Some(minute_clock(pm_start));
        criteria.end_time_pm = Some(minute_clock(pm_start + pm_len));
        (criteria, am_len + pm_len)
    }
}

fn splitter_for(criteria: &course_scheduler::SchedulingCriteria) -> SessionSplitter {
    let config = TimeBlockConfiguration::from_criteria(criteria).expect("generated criteria are valid");
    SessionSplitter::new(config).expect("generated configuration is valid")
}

fn duration_in_quarters() -> impl Strategy<Value = f64> {
    (1u32..=96).prop_map(|quarters| quarters as f64 * 0.25)
}

proptest! {
    #[test]
    fn duration_is_conserved(criteria in arb_criteria(), duration in duration_in_quarters(), offset in 0u64..14) {
        let splitter = splitter_for(&criteria);
        let start = monday() + Days::new(offset);
        let max_days = (duration / splitter.config().max_daily_hours()).ceil();

        match splitter.split(duration, &SplitRequest::new("Course", 1, start)) {
            Ok(parts) => {
                let total: f64 = parts.iter().map(|p| p.duration).sum();
                prop_assert!((total - duration).abs() < 1e-9, "total {} for {}", total, duration);
            }
            Err(course_scheduler::SchedulingError::CourseSpanExceeded { .. }) => {
                prop_assert!(max_days > 3.0);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn strategy_matches_block_and_day_capacity(criteria in arb_criteria(), duration in duration_in_quarters()) {
        let splitter = splitter_for(&criteria);
        let config = splitter.config();
        let strategy = splitter.determine_strategy(duration).unwrap();

        let fits_block = config.blocks().iter().any(|b| b.duration >= duration);
        match strategy {
            SplittingStrategy::SingleBlock { .. } => prop_assert!(fits_block),
            SplittingStrategy::SameDaySplit { .. } => {
                prop_assert!(!fits_block);
                prop_assert!(duration <= config.max_daily_hours());
            }
            SplittingStrategy::MultiDaySplit { total_days, .. } => {
                prop_assert!(duration > config.max_daily_hours());
                prop_assert_eq!(total_days, (duration / config.max_daily_hours()).ceil() as u32);
            }
        }
    }

    #[test]
    fn strategy_agrees_with_parts_for_minute_level_blocks(
        (criteria, daily_minutes) in arb_minute_blocks(),
        hours in 1u32..=24,
    ) {
        let splitter = splitter_for(&criteria);
        let daily_total = daily_minutes as f64 / 60.0;

        // A course exactly one day long never needs a second day
        let full_day = splitter.plan(daily_total, &SplitRequest::new("Course", 1, monday())).unwrap();
        prop_assert_eq!(&full_day.strategy, &SplittingStrategy::SameDaySplit { total_parts: 2 });
        prop_assert!(full_day.parts.iter().all(|p| p.day == 1 && p.total_days == 1));

        let duration = hours as f64;
        let strategy = splitter.determine_strategy(duration).unwrap();
        if let Ok(plan) = splitter.plan(duration, &SplitRequest::new("Course", 1, monday())) {
            let generated_days = plan.parts.last().map(|p| p.total_days).unwrap_or(0);
            prop_assert_eq!(&plan.strategy, &strategy);
            prop_assert_eq!(strategy.total_days(), generated_days);
            prop_assert_eq!(strategy.total_parts() as usize, plan.parts.len());
            prop_assert!(!plan.warnings.iter().any(|w| matches!(
                w,
                Warning::DayCountMismatch { .. } | Warning::PartCountMismatch { .. }
            )), "unexpected count-mismatch warning: {:?}", plan.warnings);
        }

        let minutes = hours * 60;
        let expected_days = minutes.div_ceil(daily_minutes);
        match strategy {
            SplittingStrategy::MultiDaySplit { total_days, .. } => {
                prop_assert!(minutes > daily_minutes);
                prop_assert_eq!(total_days, expected_days);
            }
            _ => prop_assert!(minutes <= daily_minutes),
        }
    }

    #[test]
    fn parts_are_sequenced_and_on_permitted_days(
        criteria in arb_criteria(),
        duration in duration_in_quarters(),
        offset in 0u64..14,
    ) {
        let splitter = splitter_for(&criteria);
        let start = monday() + Days::new(offset);
        let Ok(plan) = splitter.plan(duration, &SplitRequest::new("Course", 2, start)) else {
            return Ok(());
        };
        let parts = &plan.parts;
        let total_parts = parts.len() as u32;
        let total_days = parts.last().map(|p| p.day).unwrap_or(0);

        prop_assert_eq!(plan.strategy.total_parts(), total_parts);
        prop_assert!(!plan.warnings.iter().any(|w| matches!(w, Warning::PartCountMismatch { .. })), "unexpected part-count mismatch warning: {:?}", plan.warnings);

        let permitted: Vec<Weekday> = splitter.config().scheduling_days().to_vec();
        let mut previous: Option<(u32, NaiveDate)> = None;
        for (index, part) in parts.iter().enumerate() {
            prop_assert_eq!(part.part, index as u32 + 1);
            prop_assert_eq!(part.total_parts, total_parts);
            prop_assert_eq!(part.total_days, total_days);
            prop_assert!(part.start >= start.and_hms_opt(0, 0, 0).unwrap());
            prop_assert!(permitted.contains(&part.start.date().weekday()));
            prop_assert!(part.end > part.start);

            if let Some((day, date)) = previous {
                prop_assert!(part.day == day || part.day == day + 1);
                prop_assert_eq!(part.day == day, part.start.date() == date);
                prop_assert!(part.start.date() >= date);
            } else {
                prop_assert_eq!(part.day, 1);
            }
            previous = Some((part.day, part.start.date()));
        }
        prop_assert!(total_days <= 3);
    }
}
