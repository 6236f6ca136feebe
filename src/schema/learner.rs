//! Learner records

use serde::{Deserialize, Serialize};

/// A learner to be placed into a cohort.
///
/// Identity is opaque to the engine; only the grouping keys are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Learner {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub training_location: String,
    #[serde(default)]
    pub functional_area: Option<String>,
}

impl Learner {
    pub fn new(id: impl Into<String>, training_location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            training_location: training_location.into(),
            functional_area: None,
        }
    }

    pub fn with_functional_area(mut self, area: impl Into<String>) -> Self {
        self.functional_area = Some(area.into());
        self
    }
}
