//! Price scoring: room-adjusted affordability across the candidate set.

use std::collections::BTreeMap;

use log::warn;
use nestrank_core::{Property, PropertyId};

use crate::curve::value_bounds;
use crate::session::RatingSession;

/// Score every candidate gets when adjusted prices carry no spread, e.g.
/// with a single candidate.
pub const FLAT_PRICE_SCORE: f64 = 0.8;

/// Write room-adjusted affordability scores for the candidate set.
///
/// Rents are first adjusted by room composition (see [`adjusted_price`]) so
/// differently sized properties compare fairly, then mapped through a
/// square-root curve floored at `0.4`: the cheapest adjusted price scores
/// `1.0`, the dearest `0.4`, and scores fall off steeply as a candidate
/// moves away from the cheapest. A flat price range scores every candidate
/// [`FLAT_PRICE_SCORE`].
///
/// An empty candidate set logs a warning and leaves the board untouched.
pub fn score(session: &mut RatingSession) {
    if session.properties().is_empty() {
        warn!("no candidate properties; skipping price scoring");
        return;
    }

    let adjusted: Vec<(PropertyId, f64)> = session
        .properties()
        .iter()
        .map(|property| (property.id.clone(), adjusted_price(property)))
        .collect();

    let Some((min, max)) = value_bounds(adjusted.iter().map(|(_, price)| *price)) else {
        return;
    };

    let scores: BTreeMap<PropertyId, f64> = adjusted
        .into_iter()
        .map(|(id, price)| {
            let score = if max == min {
                FLAT_PRICE_SCORE
            } else {
                let normalized = (price - min) / (max - min);
                0.4 + 0.6 * (1.0 - normalized).sqrt()
            };
            (id, score)
        })
        .collect();

    session.board_mut().set_price_scores(scores);
}

/// Weekly rent divided by a weighted room-count denominator.
///
/// The denominator `bedrooms + 0.5 + 0.3·bathrooms + 0.2·parking` rewards
/// extra rooms at a discount. Listing data is of variable quality; a
/// non-positive denominator falls back to the raw rent rather than
/// producing a negative or infinite price.
///
/// # Examples
/// ```
/// use nestrank_core::Property;
/// use nestrank_scorer::price::adjusted_price;
///
/// let property = Property::new("p1", "a").with_rooms(1.0, 1.0, 1.0).with_weekly_rent(100.0);
/// assert!((adjusted_price(&property) - 50.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn adjusted_price(property: &Property) -> f64 {
    let denominator = property.bedrooms + 0.5 + 0.3 * property.bathrooms
        + 0.2 * property.parking_spaces;
    if denominator <= 0.0 {
        return property.weekly_rent;
    }
    property.weekly_rent / denominator
}
