#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the scoring pipeline.

use std::cell::RefCell;
use std::collections::BTreeMap;

use geo::Coord;
use nestrank_core::test_support::{FixedAmenityProvider, FixedRoutePlanner};
use nestrank_core::{
    AmenityCategory, AmenitySurvey, AmenityTally, Poi, Property, PropertyId, RouteLeg, TravelMode,
};
use nestrank_scorer::{RatingSession, amenities, curve, distance, total};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    session: RefCell<RatingSession>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        session: RefCell::new(RatingSession::new(Vec::new(), Vec::new())),
    }
}

fn selected_poi() -> Poi {
    Poi::new("poi-1", "1 Office Plaza")
}

fn id(raw: &str) -> PropertyId {
    PropertyId::new(raw)
}

#[given("a candidate set with two routable properties")]
fn routable_candidates(context: &TestContext) {
    context.session.borrow_mut().replace_candidates(
        vec![
            Property::new("near", "12 High St"),
            Property::new("far", "9 Low Rd"),
        ],
        vec![selected_poi()],
    );
}

#[given("a candidate set with two located properties")]
fn located_candidates(context: &TestContext) {
    context.session.borrow_mut().replace_candidates(
        vec![
            Property::new("near", "12 High St").with_location(Coord { x: 151.2, y: -33.9 }),
            Property::new("far", "9 Low Rd").with_location(Coord { x: 151.1, y: -33.8 }),
        ],
        vec![selected_poi()],
    );
}

#[given("factor scores that favour the first property")]
fn seeded_factor_scores(context: &TestContext) {
    let mut session = context.session.borrow_mut();
    session.board_mut().set_price_scores(BTreeMap::from([
        (id("near"), 1.0),
        (id("far"), 0.4),
    ]));
    session.board_mut().set_safety_scores(BTreeMap::from([
        (id("near"), 0.9),
        (id("far"), 0.5),
    ]));
}

#[when("distance scores are recomputed for the selected POI")]
fn recompute_distance(context: &TestContext) {
    let planner = FixedRoutePlanner::with_legs(vec![
        RouteLeg::new("near", 500.0, "300s"),
        RouteLeg::new("far", 1500.0, "900s"),
    ]);
    let mut session = context.session.borrow_mut();
    distance::score(
        &mut session,
        &planner,
        Some(&selected_poi()),
        TravelMode::Walking,
    )
    .expect("distance scoring should succeed");
}

#[when("amenity scores are recomputed with identical surveys")]
fn recompute_amenities(context: &TestContext) {
    let survey = AmenitySurvey::new()
        .with_tally(AmenityCategory::Restaurant, AmenityTally::with_count(20))
        .with_tally(AmenityCategory::Park, AmenityTally::with_count(5));
    let provider = FixedAmenityProvider::with_survey(survey);
    let mut session = context.session.borrow_mut();
    amenities::score(&mut session, &provider);
}

#[when("total scores are recomputed")]
fn recompute_totals(context: &TestContext) {
    total::score(&mut context.session.borrow_mut());
}

#[then("the closer property scores strictly higher")]
fn assert_closer_scores_higher(context: &TestContext) {
    let session = context.session.borrow();
    let scores = session.board().distance_scores();
    let near = scores.get(&id("near")).copied().expect("near scored");
    let far = scores.get(&id("far")).copied().expect("far scored");
    assert!(near > far, "expected {near} > {far}");
}

#[then("both properties take the flat distribution score")]
fn assert_flat_distribution(context: &TestContext) {
    let session = context.session.borrow();
    let scores = session.board().amenities_scores();
    assert_eq!(scores.get(&id("near")), Some(&curve::FLAT_DISTRIBUTION_SCORE));
    assert_eq!(scores.get(&id("far")), Some(&curve::FLAT_DISTRIBUTION_SCORE));
}

#[then("the totals span the unit interval")]
fn assert_totals_span_unit_interval(context: &TestContext) {
    let session = context.session.borrow();
    let totals = session.board().total_scores();
    assert_eq!(totals.get(&id("near")), Some(&1.0));
    assert_eq!(totals.get(&id("far")), Some(&0.0));
}

#[scenario(path = "tests/features/rating_pipeline.feature", index = 0)]
fn closer_candidates_outrank_distant_ones(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/rating_pipeline.feature", index = 1)]
fn identical_surveys_share_the_flat_default(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/rating_pipeline.feature", index = 2)]
fn totals_rescale_across_the_candidate_set(context: TestContext) {
    let _ = context;
}
