//! Learner grouping and cohort slicing

use std::collections::HashMap;

use crate::schema::Learner;
use crate::types::{GroupType, SessionGroup};
use crate::{Result, SchedulingError};

/// Learners sharing one grouping key, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnerGroup {
    pub location: String,
    pub functional_area: Option<String>,
    pub group_type: GroupType,
    pub learners: Vec<Learner>,
}

impl LearnerGroup {
    /// Display name, e.g. "Plant A" or "Plant A - Logistics".
    pub fn name(&self) -> String {
        match &self.functional_area {
            Some(area) => format!("{} - {}", self.location, area),
            None => self.location.clone(),
        }
    }
}

/// Number of cohorts needed for `learner_count` learners.
pub fn sessions_needed(learner_count: usize, max_attendees: u32) -> usize {
    if max_attendees == 0 {
        return 0;
    }
    learner_count.div_ceil(max_attendees as usize)
}

/// Partition learners, in input order, into contiguous cohorts of at most
/// `max_attendees`.
///
/// The last cohort may be smaller. `user_range` is a 1-based inclusive label of
/// each cohort's position in the input, e.g. `"11-20"`.
///
/// ```rust
/// use course_scheduler::scheduling::group_learners_into_cohorts;
///
/// let learners: Vec<u32> = (1..=23).collect();
/// let cohorts = group_learners_into_cohorts(&learners, 10).unwrap();
/// let sizes: Vec<usize> = cohorts.iter().map(|c| c.user_count).collect();
/// assert_eq!(sizes, vec![10, 10, 3]);
/// assert_eq!(cohorts[2].user_range, "21-23");
/// ```
pub fn group_learners_into_cohorts<T: Clone>(
    learners: &[T],
    max_attendees: u32,
) -> Result<Vec<SessionGroup<T>>> {
    if max_attendees == 0 {
        return Err(SchedulingError::InvalidCapacity { value: 0 });
    }

    let capacity = max_attendees as usize;
    Ok(learners
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| {
            let first = index * capacity + 1;
            let last = first + chunk.len() - 1;
            SessionGroup {
                session_number: index as u32 + 1,
                users: chunk.to_vec(),
                user_count: chunk.len(),
                user_range: format!("{}-{}", first, last),
            }
        })
        .collect())
}

/// Group learners by the configured key, keeping groups in first-seen order.
pub fn group_learners_by_key(learners: &[Learner], group_type: GroupType) -> Vec<LearnerGroup> {
    let mut groups: Vec<LearnerGroup> = Vec::new();
    let mut index: HashMap<(String, Option<String>), usize> = HashMap::new();

    for learner in learners {
        let functional_area = match group_type {
            GroupType::Location => None,
            GroupType::LocationAndFunctionalArea => learner.functional_area.clone(),
        };
        let key = (learner.training_location.clone(), functional_area);

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(LearnerGroup {
                location: key.0.clone(),
                functional_area: key.1.clone(),
                group_type,
                learners: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].learners.push(learner.clone());
    }

    groups
}
