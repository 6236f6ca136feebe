//! Classroom double-booking detection

use std::collections::HashMap;

use tracing::{info, warn};

use crate::types::{Conflict, ConflictKind, ScheduleValidation, Session, Warning};

/// Sessions shorter than this many hours produce a warning.
pub const SHORT_SESSION_HOURS: f64 = 0.5;

/// Check an assembled schedule for classroom double-booking.
///
/// Sessions are grouped by `(location, classroom_number)`. Within a classroom
/// they are ordered by start time and each adjacent pair is compared; a pair
/// conflicts when the earlier one ends after the later one starts. Touching
/// endpoints are not a conflict. Overlaps between non-adjacent sessions are not
/// reported separately.
///
/// Conflicts are reported, never corrected.
pub fn validate_schedule(sessions: &[Session]) -> ScheduleValidation {
    let mut order: Vec<(&str, u32)> = Vec::new();
    let mut classrooms: HashMap<(&str, u32), Vec<&Session>> = HashMap::new();

    for session in sessions {
        let key = (session.location.as_str(), session.classroom_number);
        classrooms
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(session);
    }

    let mut conflicts = Vec::new();
    for key in &order {
        let Some(group) = classrooms.get_mut(key) else {
            continue;
        };
        group.sort_by_key(|session| session.start);

        for pair in group.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if current.end > next.start {
                let conflict = Conflict {
                    kind: ConflictKind::TimeOverlap,
                    classroom_key: current.classroom_key(),
                    session1: current.summary(),
                    session2: next.summary(),
                };
                warn!(
                    classroom = %conflict.classroom_key,
                    first = %conflict.session1,
                    second = %conflict.session2,
                    "Classroom double-booked"
                );
                conflicts.push(conflict);
            }
        }
    }

    let warnings: Vec<Warning> = sessions
        .iter()
        .filter(|session| session.duration < SHORT_SESSION_HOURS)
        .map(|session| Warning::ShortSession {
            session_title: session.title.clone(),
            duration: session.duration,
        })
        .collect();

    let total_classrooms = order.len();

    info!(
        sessions = sessions.len(),
        classrooms = total_classrooms,
        conflicts = conflicts.len(),
        warnings = warnings.len(),
        "Schedule validated"
    );

    ScheduleValidation {
        is_valid: conflicts.is_empty(),
        conflicts,
        warnings,
        total_sessions: sessions.len(),
        total_classrooms,
    }
}
