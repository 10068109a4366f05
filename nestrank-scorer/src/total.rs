//! Aggregation: fold the four factor maps into one total score per candidate.

use std::collections::BTreeMap;

use nestrank_core::PropertyId;

use crate::curve::value_bounds;
use crate::session::RatingSession;

/// Combine the four factor scores under the user's weights and write totals.
///
/// Weights are normalised to sum to one (an all-zero configuration falls
/// back to equal shares); a candidate missing from a factor map contributes
/// `0.0` for that factor, so the aggregator never fails and always produces
/// a map. With more than one candidate the weighted sums rescale linearly
/// into `[0.0, 1.0]` across the set — identical sums all become `1.0` — and
/// a lone candidate keeps its raw weighted sum.
pub fn score(session: &mut RatingSession) {
    let weights = session.weights().normalised();

    let mut totals: BTreeMap<PropertyId, f64> = BTreeMap::new();
    for property in session.properties() {
        let board = session.board();
        let total = factor_or_zero(board.distance_scores(), &property.id) * weights.distance
            + factor_or_zero(board.price_scores(), &property.id) * weights.price
            + factor_or_zero(board.safety_scores(), &property.id) * weights.neighborhood_safety
            + factor_or_zero(board.amenities_scores(), &property.id) * weights.amenity;
        totals.insert(property.id.clone(), total);
    }

    if totals.len() > 1 {
        rescale_across_candidates(&mut totals);
    }

    session.board_mut().set_total_scores(totals);
}

/// Read one factor score, defaulting absent candidates to zero.
fn factor_or_zero(scores: &BTreeMap<PropertyId, f64>, id: &PropertyId) -> f64 {
    scores.get(id).copied().unwrap_or(0.0)
}

/// Rescale weighted sums into `[0.0, 1.0]` relative to the candidate set.
fn rescale_across_candidates(totals: &mut BTreeMap<PropertyId, f64>) {
    let Some((min, max)) = value_bounds(totals.values().copied()) else {
        return;
    };
    for total in totals.values_mut() {
        *total = if max == min {
            1.0
        } else {
            (*total - min) / (max - min)
        };
    }
}
