//! Safety scoring: resolution of externally supplied safety ratings.
//!
//! No curve of its own; each property's
//! [`SafetyRating`](nestrank_core::SafetyRating) resolves to a usable score,
//! with missing and zero ratings floored so unknown safety data never zeroes
//! a candidate.

use std::collections::BTreeMap;

use log::warn;
use nestrank_core::PropertyId;

use crate::session::RatingSession;

/// Write resolved safety scores for the candidate set.
///
/// An empty candidate set logs a warning and leaves the board untouched.
pub fn score(session: &mut RatingSession) {
    if session.properties().is_empty() {
        warn!("no candidate properties; skipping safety scoring");
        return;
    }

    let scores: BTreeMap<PropertyId, f64> = session
        .properties()
        .iter()
        .map(|property| (property.id.clone(), property.safety.resolve()))
        .collect();

    session.board_mut().set_safety_scores(scores);
}
