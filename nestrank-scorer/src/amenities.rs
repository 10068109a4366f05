//! Amenity scoring: categorised nearby-amenity counts per candidate.
//!
//! Each candidate's survey squashes through a logistic curve per category,
//! combines under fixed category weights, and the resulting raw scores are
//! rescaled across the candidate set with a floor before a logarithmic
//! compression pass reins in amenity-rich outliers.

use std::collections::BTreeMap;

use log::warn;
use nestrank_core::{AmenityCategory, AmenityProvider, AmenitySurvey, PropertyId};

use crate::curve::{
    SCORE_CEILING, SCORE_FLOOR, apply_logarithmic_compression, logistic,
    normalize_score_with_floor, value_bounds,
};
use crate::session::RatingSession;

/// Survey every candidate's surroundings and write normalised amenity scores.
///
/// The provider is queried once per candidate with a usable location.
/// Candidates without one, and candidates whose lookup fails, take the
/// [`SCORE_FLOOR`] directly — they neither abort the batch nor participate
/// in the cross-candidate normalization. Successful lookups also publish
/// their raw survey as display data.
///
/// The maps are replaced whole, including when the candidate set is empty,
/// so no stale entries survive a recompute.
pub fn score<A: AmenityProvider + ?Sized>(session: &mut RatingSession, provider: &A) {
    if session.properties().is_empty() {
        warn!("no candidate properties; amenity scoring clears its slots");
    }

    let mut raw_scores: BTreeMap<PropertyId, f64> = BTreeMap::new();
    let mut floored: Vec<PropertyId> = Vec::new();
    let mut surveys: BTreeMap<PropertyId, AmenitySurvey> = BTreeMap::new();

    for property in session.properties() {
        let Some(location) = property.scoring_location() else {
            warn!(
                "property {} has no usable coordinates; assigning the floor amenity score",
                property.id
            );
            floored.push(property.id.clone());
            continue;
        };
        match provider.nearby_amenities(location) {
            Ok(survey) => {
                raw_scores.insert(property.id.clone(), weighted_survey_score(&survey));
                surveys.insert(property.id.clone(), survey);
            }
            Err(error) => {
                warn!(
                    "amenity lookup failed for property {}: {error}; assigning the floor score",
                    property.id
                );
                floored.push(property.id.clone());
            }
        }
    }

    let mut scores = compress_raw_scores(&raw_scores);
    for id in floored {
        scores.insert(id, SCORE_FLOOR);
    }

    session.board_mut().set_amenities_results(scores, surveys);
}

/// Floor-normalise raw weighted scores across the run, then compress.
fn compress_raw_scores(raw_scores: &BTreeMap<PropertyId, f64>) -> BTreeMap<PropertyId, f64> {
    let Some((min, max)) = value_bounds(raw_scores.values().copied()) else {
        return BTreeMap::new();
    };
    let normalized: BTreeMap<PropertyId, f64> = raw_scores
        .iter()
        .map(|(id, &score)| {
            let rescaled = normalize_score_with_floor(score, min, max, SCORE_FLOOR, SCORE_CEILING);
            (id.clone(), rescaled)
        })
        .collect();
    apply_logarithmic_compression(&normalized)
}

/// Logistic score for one category count against its saturation threshold.
///
/// Reaching roughly 70% of the threshold scores `0.5`; the curve saturates
/// toward `1.0` past the threshold and stays within `[0.0, 1.0]` for any
/// count.
///
/// # Examples
/// ```
/// use nestrank_scorer::amenities::single_category_score;
///
/// let sparse = single_category_score(0, 20);
/// let dense = single_category_score(40, 20);
/// assert!(sparse < 0.1);
/// assert!(dense > 0.9);
/// ```
#[must_use]
pub fn single_category_score(count: u32, threshold: u32) -> f64 {
    let ratio = f64::from(count) / f64::from(threshold);
    logistic(5.0 * (ratio - 0.7)).min(1.0)
}

/// Weighted average of the five category scores for one survey.
///
/// Categories absent from the survey count zero places; the fixed category
/// weights sum to one, so the result stays in `[0.0, 1.0]`.
#[must_use]
pub fn weighted_survey_score(survey: &AmenitySurvey) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for category in AmenityCategory::ALL {
        let category_score = single_category_score(survey.count(category), category.threshold());
        weighted += category_score * category.weight();
        total_weight += category.weight();
    }
    weighted / total_weight
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use super::*;
    use geo::Coord;
    use nestrank_core::test_support::{FailingAmenityProvider, FixedAmenityProvider};
    use nestrank_core::{AmenityTally, Property};
    use rstest::rstest;

    use crate::curve::FLAT_DISTRIBUTION_SCORE;

    fn located(id: &str) -> Property {
        Property::new(id, "addr").with_location(Coord { x: 151.2, y: -33.9 })
    }

    fn busy_survey() -> AmenitySurvey {
        AmenitySurvey::new()
            .with_tally(AmenityCategory::Hospital, AmenityTally::with_count(18))
            .with_tally(AmenityCategory::ConvenienceStore, AmenityTally::with_count(30))
            .with_tally(AmenityCategory::Restaurant, AmenityTally::with_count(25))
            .with_tally(AmenityCategory::Gym, AmenityTally::with_count(12))
            .with_tally(AmenityCategory::Park, AmenityTally::with_count(6))
    }

    /// Provider double that fails the test if it is ever consulted.
    struct UnreachableProvider;

    impl AmenityProvider for UnreachableProvider {
        fn nearby_amenities(
            &self,
            _location: Coord<f64>,
        ) -> Result<AmenitySurvey, nestrank_core::AmenityLookupError> {
            panic!("amenity provider must not be called for unlocated candidates");
        }
    }

    #[rstest]
    fn unlocated_candidate_takes_the_floor_without_a_lookup() {
        let mut session = RatingSession::new(
            vec![Property::new("p1", "addr").with_location(Coord { x: 0.0, y: 0.0 })],
            Vec::new(),
        );

        score(&mut session, &UnreachableProvider);

        assert_eq!(
            session.board().amenities_scores().get(&"p1".into()),
            Some(&SCORE_FLOOR)
        );
        assert!(session.board().amenities_data().is_empty());
    }

    #[rstest]
    fn failed_lookup_floors_the_candidate_and_continues() {
        let mut session =
            RatingSession::new(vec![located("p1"), located("p2")], Vec::new());

        score(&mut session, &FailingAmenityProvider);

        let scores = session.board().amenities_scores();
        assert_eq!(scores.get(&"p1".into()), Some(&SCORE_FLOOR));
        assert_eq!(scores.get(&"p2".into()), Some(&SCORE_FLOOR));
    }

    #[rstest]
    fn identical_surveys_take_the_flat_distribution_default() {
        let mut session =
            RatingSession::new(vec![located("p1"), located("p2")], Vec::new());
        let provider = FixedAmenityProvider::with_survey(busy_survey());

        score(&mut session, &provider);

        // Equal raw scores hit the flat branch of the floored
        // normalization; compression then no-ops on the zero spread.
        let scores = session.board().amenities_scores();
        assert_eq!(scores.get(&"p1".into()), Some(&FLAT_DISTRIBUTION_SCORE));
        assert_eq!(scores.get(&"p2".into()), Some(&FLAT_DISTRIBUTION_SCORE));
    }

    #[rstest]
    fn surveys_are_published_as_display_data() {
        let mut session = RatingSession::new(vec![located("p1")], Vec::new());
        let provider = FixedAmenityProvider::with_survey(busy_survey());

        score(&mut session, &provider);

        let data = session
            .board()
            .amenities_data()
            .get(&"p1".into())
            .expect("survey should be kept");
        assert_eq!(data.count(AmenityCategory::Restaurant), 25);
    }

    #[rstest]
    fn empty_candidate_set_clears_the_slots() {
        let mut session = RatingSession::new(vec![located("p1")], Vec::new());
        score(&mut session, &FixedAmenityProvider::with_survey(busy_survey()));
        assert!(!session.board().amenities_scores().is_empty());

        session.replace_candidates(Vec::new(), Vec::new());
        score(&mut session, &FixedAmenityProvider::default());

        assert!(session.board().amenities_scores().is_empty());
        assert!(session.board().amenities_data().is_empty());
    }

    #[rstest]
    #[case(0, 20)]
    #[case(10, 20)]
    #[case(20, 20)]
    #[case(1000, 10)]
    fn category_scores_stay_in_unit_range(#[case] count: u32, #[case] threshold: u32) {
        let value = single_category_score(count, threshold);
        assert!((0.0..=1.0).contains(&value));
    }

    #[rstest]
    fn category_score_is_half_at_seventy_percent_of_threshold() {
        let value = single_category_score(14, 20);
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[rstest]
    fn empty_survey_scores_low_but_not_zero() {
        let value = weighted_survey_score(&AmenitySurvey::new());
        assert!(value > 0.0);
        assert!(value < 0.1);
    }
}
