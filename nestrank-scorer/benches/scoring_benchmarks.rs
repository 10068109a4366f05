//! Criterion benchmarks for the scoring pipeline.
//!
//! Measures a full recompute (all four factors plus aggregation) across
//! candidate-set sizes to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package nestrank-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo::Coord;
use nestrank_core::test_support::{FixedAmenityProvider, FixedRoutePlanner};
use nestrank_core::{
    AmenityCategory, AmenitySurvey, AmenityTally, Poi, PoiKind, Property, RouteLeg, SafetyRating,
    TravelMode,
};
use nestrank_scorer::{RatingSession, amenities, distance, price, safety, total};

/// Candidate-set sizes to benchmark.
const CANDIDATE_COUNTS: &[usize] = &[50, 100, 200];

/// Deterministic synthetic candidate set.
///
/// Attributes vary with the index so every normalization path sees a spread
/// rather than the flat-distribution shortcut.
fn generate_candidates(count: usize) -> Vec<Property> {
    (0..count)
        .map(|i| {
            let step = i as f64;
            Property::new(format!("p{i}"), format!("{i} Example St"))
                .with_location(Coord {
                    x: 151.0 + step * 0.001,
                    y: -33.9 + step * 0.001,
                })
                .with_rooms(1.0 + step % 4.0, 1.0 + step % 2.0, step % 3.0)
                .with_weekly_rent(400.0 + step * 7.0)
                .with_safety(SafetyRating::new(0.3 + (step % 7.0) / 10.0))
        })
        .collect()
}

/// One route leg per candidate with spread-out travel times.
fn generate_legs(count: usize) -> Vec<RouteLeg> {
    (0..count)
        .map(|i| {
            let seconds = 120 + i * 37;
            RouteLeg::new(format!("p{i}"), 500.0 + (i as f64) * 40.0, format!("{seconds}s"))
        })
        .collect()
}

fn benchmark_survey() -> AmenitySurvey {
    AmenitySurvey::new()
        .with_tally(AmenityCategory::Hospital, AmenityTally::with_count(8))
        .with_tally(AmenityCategory::ConvenienceStore, AmenityTally::with_count(22))
        .with_tally(AmenityCategory::Restaurant, AmenityTally::with_count(17))
        .with_tally(AmenityCategory::Gym, AmenityTally::with_count(6))
        .with_tally(AmenityCategory::Park, AmenityTally::with_count(4))
}

/// Benchmark a full pipeline recompute per candidate-set size.
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for &count in CANDIDATE_COUNTS {
        let base_session = RatingSession::new(
            generate_candidates(count),
            vec![Poi::new("poi-1", "1 Office Plaza").with_kind(PoiKind::Work)],
        );
        let planner = FixedRoutePlanner::with_legs(generate_legs(count));
        let provider = FixedAmenityProvider::with_survey(benchmark_survey());
        let poi = Poi::new("poi-1", "1 Office Plaza").with_kind(PoiKind::Work);

        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &count,
            |bencher, _| {
                bencher.iter(|| {
                    let mut session = base_session.clone();
                    distance::score(&mut session, &planner, Some(&poi), TravelMode::Walking)
                        .expect("benchmark distance scoring should succeed");
                    price::score(&mut session);
                    safety::score(&mut session);
                    amenities::score(&mut session, &provider);
                    total::score(&mut session);
                    session
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_pipeline);
criterion_main!(benches);
