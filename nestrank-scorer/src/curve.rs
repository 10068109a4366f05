//! Normalization primitives shared by the factor scorers.
//!
//! Every scorer reduces raw observations to `[0.0, 1.0]` through some mix of
//! these curves: a logistic squash for counts, a floored min-max rescale so
//! weak candidates keep a non-zero score, and a logarithmic compression pass
//! that tames amenity-rich outliers.

use std::collections::BTreeMap;

/// Floor assigned in place of a zero score when data is missing or weak.
pub const SCORE_FLOOR: f64 = 0.4;

/// Ceiling of the floored normalization range.
pub const SCORE_CEILING: f64 = 1.0;

/// Score assigned to every candidate when a normalization input is flat
/// (`max == min`) and no ordering signal exists.
pub const FLAT_DISTRIBUTION_SCORE: f64 = 0.7;

/// Spread below which logarithmic compression is a no-op; compressing an
/// already-tight distribution would only amplify noise.
pub const COMPRESSION_MIN_SPREAD: f64 = 0.1;

/// Standard logistic function `1 / (1 + e^(-x))`.
#[must_use]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Decreasing sigmoid centred on `midpoint`.
///
/// Values below the midpoint map above `0.5`, values above map below; the
/// steepness controls how quickly the transition happens.
///
/// # Examples
/// ```
/// use nestrank_scorer::curve::sigmoid_normalize;
///
/// let mid = sigmoid_normalize(300.0, 300.0, 0.02);
/// assert!((mid - 0.5).abs() < 1e-9);
/// assert!(sigmoid_normalize(100.0, 300.0, 0.02) > 0.5);
/// assert!(sigmoid_normalize(500.0, 300.0, 0.02) < 0.5);
/// ```
#[must_use]
pub fn sigmoid_normalize(value: f64, midpoint: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (steepness * (value - midpoint)).exp())
}

/// Rescale `raw` from `[min, max]` into `[floor, ceiling]`.
///
/// A flat input range carries no ordering signal, so every candidate gets
/// [`FLAT_DISTRIBUTION_SCORE`] regardless of `raw`.
///
/// # Examples
/// ```
/// use nestrank_scorer::curve::normalize_score_with_floor;
///
/// assert_eq!(normalize_score_with_floor(5.0, 5.0, 5.0, 0.4, 1.0), 0.7);
/// let mid = normalize_score_with_floor(5.0, 0.0, 10.0, 0.4, 1.0);
/// assert!((mid - 0.7).abs() < 1e-9);
/// ```
#[must_use]
pub fn normalize_score_with_floor(raw: f64, min: f64, max: f64, floor: f64, ceiling: f64) -> f64 {
    if max == min {
        return FLAT_DISTRIBUTION_SCORE;
    }
    floor + (ceiling - floor) * (raw - min) / (max - min)
}

/// Compress the upper tail of a score distribution.
///
/// Scores already floored into `[0.4, 1.0]` are shifted so the minimum maps
/// to `0.1`, squashed through `ln(1 + x)`, and rescaled back into
/// `[0.4, 1.0]`. Distributions with spread below
/// [`COMPRESSION_MIN_SPREAD`] are returned unchanged, as is an empty map.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use nestrank_scorer::curve::apply_logarithmic_compression;
///
/// let empty: BTreeMap<&str, f64> = BTreeMap::new();
/// assert!(apply_logarithmic_compression(&empty).is_empty());
///
/// let tight = BTreeMap::from([("a", 0.50), ("b", 0.55)]);
/// assert_eq!(apply_logarithmic_compression(&tight), tight);
/// ```
#[must_use]
pub fn apply_logarithmic_compression<K: Ord + Clone>(
    scores: &BTreeMap<K, f64>,
) -> BTreeMap<K, f64> {
    let Some((min, max)) = value_bounds(scores.values().copied()) else {
        return BTreeMap::new();
    };
    let spread = max - min;
    if spread < COMPRESSION_MIN_SPREAD {
        return scores.clone();
    }

    let max_log_score = (1.0 + (spread + 0.1)).ln();
    scores
        .iter()
        .map(|(key, &score)| {
            let shifted = score - min + 0.1;
            let log_score = (1.0 + shifted).ln() / max_log_score;
            let compressed = SCORE_FLOOR + (SCORE_CEILING - SCORE_FLOOR) * log_score;
            (key.clone(), compressed)
        })
        .collect()
}

/// Minimum and maximum of a value sequence; `None` when empty.
pub(crate) fn value_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        bounds = Some(bounds.map_or((value, value), |(min, max)| {
            (min.min(value), max.max(value))
        }));
    }
    bounds
}
