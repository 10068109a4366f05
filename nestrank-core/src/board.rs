//! Shared score state written by the scorers and read by the aggregator.

use std::collections::BTreeMap;

use crate::amenity::AmenitySurvey;
use crate::property::PropertyId;

/// In-memory score state for one candidate set.
///
/// Each slot is an independent map keyed by [`PropertyId`] and is replaced
/// whole on every recompute; there are no incremental merges, so a recompute
/// can never leave keys from a previous candidate set behind. The board has
/// no persistence: it is rebuilt from scratch each session.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use nestrank_core::{PropertyId, ScoreBoard};
///
/// let mut board = ScoreBoard::default();
/// board.set_price_scores(BTreeMap::from([(PropertyId::new("p1"), 0.8)]));
/// assert_eq!(board.price_scores().get(&PropertyId::new("p1")), Some(&0.8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreBoard {
    distance_scores: BTreeMap<PropertyId, f64>,
    travel_times: BTreeMap<PropertyId, u32>,
    distances: BTreeMap<PropertyId, f64>,
    price_scores: BTreeMap<PropertyId, f64>,
    safety_scores: BTreeMap<PropertyId, f64>,
    amenities_scores: BTreeMap<PropertyId, f64>,
    amenities_data: BTreeMap<PropertyId, AmenitySurvey>,
    total_scores: BTreeMap<PropertyId, f64>,
}

impl ScoreBoard {
    /// Normalised distance scores for the most recent distance recompute.
    #[must_use]
    pub const fn distance_scores(&self) -> &BTreeMap<PropertyId, f64> {
        &self.distance_scores
    }

    /// Travel times in seconds, a side output of distance scoring.
    #[must_use]
    pub const fn travel_times(&self) -> &BTreeMap<PropertyId, u32> {
        &self.travel_times
    }

    /// Route distances in kilometres, a side output of distance scoring.
    #[must_use]
    pub const fn distances(&self) -> &BTreeMap<PropertyId, f64> {
        &self.distances
    }

    /// Room-adjusted affordability scores.
    #[must_use]
    pub const fn price_scores(&self) -> &BTreeMap<PropertyId, f64> {
        &self.price_scores
    }

    /// Resolved neighbourhood safety scores.
    #[must_use]
    pub const fn safety_scores(&self) -> &BTreeMap<PropertyId, f64> {
        &self.safety_scores
    }

    /// Normalised amenity scores.
    #[must_use]
    pub const fn amenities_scores(&self) -> &BTreeMap<PropertyId, f64> {
        &self.amenities_scores
    }

    /// Raw amenity surveys, a side output kept for display.
    #[must_use]
    pub const fn amenities_data(&self) -> &BTreeMap<PropertyId, AmenitySurvey> {
        &self.amenities_data
    }

    /// Aggregated total scores.
    #[must_use]
    pub const fn total_scores(&self) -> &BTreeMap<PropertyId, f64> {
        &self.total_scores
    }

    /// Replace the distance slot and its side outputs in one write.
    pub fn set_distance_results(
        &mut self,
        scores: BTreeMap<PropertyId, f64>,
        travel_times: BTreeMap<PropertyId, u32>,
        distances: BTreeMap<PropertyId, f64>,
    ) {
        self.distance_scores = scores;
        self.travel_times = travel_times;
        self.distances = distances;
    }

    /// Replace the price slot.
    pub fn set_price_scores(&mut self, scores: BTreeMap<PropertyId, f64>) {
        self.price_scores = scores;
    }

    /// Replace the safety slot.
    pub fn set_safety_scores(&mut self, scores: BTreeMap<PropertyId, f64>) {
        self.safety_scores = scores;
    }

    /// Replace the amenity slot and its side data in one write.
    pub fn set_amenities_results(
        &mut self,
        scores: BTreeMap<PropertyId, f64>,
        data: BTreeMap<PropertyId, AmenitySurvey>,
    ) {
        self.amenities_scores = scores;
        self.amenities_data = data;
    }

    /// Replace the aggregated total slot.
    pub fn set_total_scores(&mut self, scores: BTreeMap<PropertyId, f64>) {
        self.total_scores = scores;
    }
}
