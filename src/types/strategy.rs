//! Splitting strategy selection result

use serde::{Deserialize, Serialize};

use super::TimeBlock;

/// How a course duration is decomposed into session parts.
///
/// Computed per course duration and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplittingStrategy {
    /// The whole duration fits inside one block
    SingleBlock { block: TimeBlock },
    /// The duration fits in one day but spans several blocks
    SameDaySplit { total_parts: u32 },
    /// The duration needs more than one scheduling day
    MultiDaySplit { total_parts: u32, total_days: u32 },
}

impl SplittingStrategy {
    /// Number of parts the strategy expects to produce.
    pub fn total_parts(&self) -> u32 {
        match self {
            SplittingStrategy::SingleBlock { .. } => 1,
            SplittingStrategy::SameDaySplit { total_parts }
            | SplittingStrategy::MultiDaySplit { total_parts, .. } => *total_parts,
        }
    }

    /// Number of calendar days the strategy expects to use.
    pub fn total_days(&self) -> u32 {
        match self {
            SplittingStrategy::SingleBlock { .. } | SplittingStrategy::SameDaySplit { .. } => 1,
            SplittingStrategy::MultiDaySplit { total_days, .. } => *total_days,
        }
    }

    /// Short label used in logs.
    pub fn describe(&self) -> &'static str {
        match self {
            SplittingStrategy::SingleBlock { .. } => "single block",
            SplittingStrategy::SameDaySplit { .. } => "same-day split",
            SplittingStrategy::MultiDaySplit { .. } => "multi-day split",
        }
    }
}
