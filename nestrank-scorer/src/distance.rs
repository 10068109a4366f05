//! Distance scoring: travel times from every candidate to a selected POI.
//!
//! The primary entry point routes the candidate set against one POI and
//! rescales travel times linearly so the closest candidate scores `1.0`.
//! Two further curves support kind-aware aggregate scoring: a bucketed
//! commute curve per (time, POI kind) pair and a kind-weighted average over
//! per-POI scores.

use std::collections::BTreeMap;

use log::warn;
use nestrank_core::{
    Poi, PoiId, PoiKind, Property, PropertyId, RoutePlanner, TravelMode, UNROUTABLE_SECONDS,
    poi_weight,
};

use crate::curve::sigmoid_normalize;
use crate::error::DistanceScoreError;
use crate::session::RatingSession;

/// Route the candidate set to `poi` and write normalised distance scores.
///
/// Travel times come back from the planner as one
/// [`RouteLeg`](nestrank_core::RouteLeg) per routable candidate. Sentinel
/// legs and legs whose duration cannot be parsed are invalid: they are
/// excluded from the min/max window and score exactly `0.0`. Valid times
/// rescale linearly
/// so the shortest time maps to `1.0` and the longest to `0.0`; when every
/// valid time is identical, every valid candidate scores `1.0`.
///
/// Alongside the scores, the recompute publishes travel times (seconds) and
/// route distances (kilometres) as display data.
///
/// Passing no POI or an empty candidate set logs a warning and leaves the
/// board untouched.
///
/// # Errors
/// Returns [`DistanceScoreError`] when no candidate has a routable address,
/// when the planner fails, or when it answers with zero legs. The board is
/// not written in any of these cases; previously computed distance scores
/// stay in place until the next successful recompute.
pub fn score<P: RoutePlanner + ?Sized>(
    session: &mut RatingSession,
    planner: &P,
    poi: Option<&Poi>,
    mode: TravelMode,
) -> Result<(), DistanceScoreError> {
    let Some(poi) = poi else {
        warn!("no POI selected; skipping distance scoring");
        return Ok(());
    };
    if session.properties().is_empty() {
        warn!("no candidate properties; skipping distance scoring");
        return Ok(());
    }

    let routable: Vec<Property> = session
        .properties()
        .iter()
        .filter(|property| property.has_address())
        .cloned()
        .collect();
    if routable.is_empty() {
        return Err(DistanceScoreError::NoRoutableProperties);
    }

    let legs = planner.plan_routes(poi, mode, &routable)?;
    if legs.is_empty() {
        return Err(DistanceScoreError::NoRoutes {
            poi: poi.id.clone(),
        });
    }

    let mut travel_times: BTreeMap<PropertyId, u32> = BTreeMap::new();
    let mut distances: BTreeMap<PropertyId, f64> = BTreeMap::new();
    for leg in &legs {
        if let Some(seconds) = leg.duration_seconds() {
            travel_times.insert(leg.property_id.clone(), seconds);
        }
        distances.insert(leg.property_id.clone(), leg.distance_km());
    }

    let valid_times: Vec<u32> = travel_times
        .values()
        .copied()
        .filter(|&seconds| seconds != UNROUTABLE_SECONDS)
        .collect();

    let mut scores: BTreeMap<PropertyId, f64> = BTreeMap::new();
    match (valid_times.iter().min(), valid_times.iter().max()) {
        (None, _) | (_, None) => {
            for leg in &legs {
                scores.insert(leg.property_id.clone(), 0.0);
            }
        }
        (Some(&min), Some(&max)) => {
            for leg in &legs {
                let score = travel_times
                    .get(&leg.property_id)
                    .copied()
                    .filter(|&seconds| seconds != UNROUTABLE_SECONDS)
                    .map_or(0.0, |seconds| normalised_time_score(seconds, min, max));
                scores.insert(leg.property_id.clone(), score);
            }
        }
    }

    session
        .board_mut()
        .set_distance_results(scores, travel_times, distances);
    Ok(())
}

/// Linear rescale of one valid travel time against the candidate window.
fn normalised_time_score(seconds: u32, min: u32, max: u32) -> f64 {
    if max == min {
        return 1.0;
    }
    1.0 - (f64::from(seconds) - f64::from(min)) / (f64::from(max) - f64::from(min))
}

/// Kind-weighted average over per-POI scores for one candidate.
///
/// Each POI's score contributes proportionally to its kind's weight:
/// `Σ sᵢ·wᵢ / Σ wᵢ`. POIs missing from `pois` fall back to the default
/// weight. An empty score map yields `0.0`.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use nestrank_core::{Poi, PoiKind};
/// use nestrank_scorer::distance::weighted_poi_average;
///
/// let pois = vec![
///     Poi::new("work", "cbd").with_kind(PoiKind::Work),
///     Poi::new("gym", "corner").with_kind(PoiKind::Gym),
/// ];
/// let scores = BTreeMap::from([("work".into(), 1.0), ("gym".into(), 0.5)]);
/// let average = weighted_poi_average(&scores, &pois);
/// assert!((average - 0.75).abs() < 1e-9);
/// ```
#[must_use]
pub fn weighted_poi_average(scores: &BTreeMap<PoiId, f64>, pois: &[Poi]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (poi_id, score) in scores {
        let kind = pois
            .iter()
            .find(|poi| poi.id == *poi_id)
            .and_then(|poi| poi.kind);
        let weight = poi_weight(kind);
        weighted_sum += score * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

// Commute-time buckets in seconds, before the per-kind multiplier.
const EXCELLENT_SECS: f64 = 5.0 * 60.0;
const GOOD_SECS: f64 = 15.0 * 60.0;
const FAIR_SECS: f64 = 30.0 * 60.0;
const POOR_SECS: f64 = 60.0 * 60.0;

/// Bucketed commute score for one travel time and POI kind.
///
/// Named buckets map onto score bands: Excellent (`[0.8, 1.0]`), Good
/// (`[0.6, 0.8)`), Fair (`[0.4, 0.6)`), Poor (`[0.2, 0.4)`), and Very Poor
/// (below `0.2`, decaying through a sigmoid). Bucket boundaries scale by the
/// kind's commute multiplier, so a 20-minute trip to work lands in a better
/// bucket than a 20-minute trip to the gym. The routing sentinel always
/// scores exactly `0.0`.
///
/// # Examples
/// ```
/// use nestrank_core::{PoiKind, UNROUTABLE_SECONDS};
/// use nestrank_scorer::distance::time_bucket_score;
///
/// assert!(time_bucket_score(120, Some(PoiKind::Gym)) >= 0.8);
/// assert_eq!(time_bucket_score(UNROUTABLE_SECONDS, Some(PoiKind::Work)), 0.0);
/// ```
#[must_use]
pub fn time_bucket_score(seconds: u32, kind: Option<PoiKind>) -> f64 {
    if seconds == UNROUTABLE_SECONDS {
        return 0.0;
    }

    let time = f64::from(seconds);
    let multiplier = kind.map_or(1.0, PoiKind::commute_multiplier);
    let excellent = EXCELLENT_SECS * multiplier;
    let good = GOOD_SECS * multiplier;
    let fair = FAIR_SECS * multiplier;
    let poor = POOR_SECS * multiplier;

    if time <= excellent {
        0.8 + 0.2 * sigmoid_normalize(time, excellent / 2.0, 0.02)
    } else if time <= good {
        let progress = (time - excellent) / (good - excellent);
        0.8 - 0.2 * progress
    } else if time <= fair {
        let progress = (time - good) / (fair - good);
        0.6 - 0.2 * progress
    } else if time <= poor {
        let progress = (time - fair) / (poor - fair);
        0.4 - 0.2 * progress
    } else {
        0.2 * sigmoid_normalize(time, poor * 1.5, 0.01)
    }
}
