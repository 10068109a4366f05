//! User preference weights over the four scoring factors.
//!
//! Weights are user-adjustable sliders in `[0.0, 1.0]` and are not required
//! to sum to one; the aggregator works with the normalised form.

/// The four factors a user can weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightFactor {
    /// Proximity to the selected POI.
    Distance,
    /// Room-adjusted affordability.
    Price,
    /// Neighbourhood safety.
    NeighborhoodSafety,
    /// Nearby amenity coverage.
    Amenity,
}

impl WeightFactor {
    /// Return the factor's snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Price => "price",
            Self::NeighborhoodSafety => "neighborhood_safety",
            Self::Amenity => "amenity",
        }
    }
}

impl std::fmt::Display for WeightFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-adjustable factor weights.
///
/// Values are clamped into `[0.0, 1.0]` on every write. The default gives
/// every factor the mid-slider value.
///
/// # Examples
/// ```
/// use nestrank_core::{WeightConfig, WeightFactor};
///
/// let mut config = WeightConfig::default();
/// config.set(WeightFactor::Price, 0.9);
/// config.set(WeightFactor::Amenity, 1.7); // clamped
/// assert_eq!(config.get(WeightFactor::Price), 0.9);
/// assert_eq!(config.get(WeightFactor::Amenity), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightConfig {
    distance: f64,
    price: f64,
    neighborhood_safety: f64,
    amenity: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            distance: 0.5,
            price: 0.5,
            neighborhood_safety: 0.5,
            amenity: 0.5,
        }
    }
}

impl WeightConfig {
    /// Construct a configuration from four raw slider values.
    ///
    /// Each value is clamped into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(distance: f64, price: f64, neighborhood_safety: f64, amenity: f64) -> Self {
        Self {
            distance: clamp_unit(distance),
            price: clamp_unit(price),
            neighborhood_safety: clamp_unit(neighborhood_safety),
            amenity: clamp_unit(amenity),
        }
    }

    /// Return the current value for a factor.
    #[must_use]
    pub const fn get(&self, factor: WeightFactor) -> f64 {
        match factor {
            WeightFactor::Distance => self.distance,
            WeightFactor::Price => self.price,
            WeightFactor::NeighborhoodSafety => self.neighborhood_safety,
            WeightFactor::Amenity => self.amenity,
        }
    }

    /// Set a factor's weight, clamping into `[0.0, 1.0]`.
    pub fn set(&mut self, factor: WeightFactor, value: f64) {
        let clamped = clamp_unit(value);
        match factor {
            WeightFactor::Distance => self.distance = clamped,
            WeightFactor::Price => self.price = clamped,
            WeightFactor::NeighborhoodSafety => self.neighborhood_safety = clamped,
            WeightFactor::Amenity => self.amenity = clamped,
        }
    }

    /// Set a factor's weight while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, factor: WeightFactor, value: f64) -> Self {
        self.set(factor, value);
        self
    }

    /// Normalise the weights to sum to one.
    ///
    /// An all-zero configuration carries no preference signal and falls back
    /// to equal weights rather than dividing by zero.
    #[must_use]
    pub fn normalised(&self) -> NormalisedWeights {
        let total = self.distance + self.price + self.neighborhood_safety + self.amenity;
        if total == 0.0 {
            return NormalisedWeights::EQUAL;
        }
        NormalisedWeights {
            distance: self.distance / total,
            price: self.price / total,
            neighborhood_safety: self.neighborhood_safety / total,
            amenity: self.amenity / total,
        }
    }
}

/// Factor weights normalised to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalisedWeights {
    /// Share of the distance factor.
    pub distance: f64,
    /// Share of the price factor.
    pub price: f64,
    /// Share of the safety factor.
    pub neighborhood_safety: f64,
    /// Share of the amenity factor.
    pub amenity: f64,
}

impl NormalisedWeights {
    /// Equal shares across the four factors.
    pub const EQUAL: Self = Self {
        distance: 0.25,
        price: 0.25,
        neighborhood_safety: 0.25,
        amenity: 0.25,
    };
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5, 0.0)]
    #[case(0.3, 0.3)]
    #[case(1.5, 1.0)]
    fn writes_clamp_into_unit_range(#[case] input: f64, #[case] expected: f64) {
        let mut config = WeightConfig::default();
        config.set(WeightFactor::Distance, input);
        assert_eq!(config.get(WeightFactor::Distance), expected);
    }

    #[rstest]
    fn normalisation_sums_to_one() {
        let config = WeightConfig::new(0.8, 0.4, 0.2, 0.6);
        let weights = config.normalised();
        let total =
            weights.distance + weights.price + weights.neighborhood_safety + weights.amenity;
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(weights.distance, 0.4);
    }

    #[rstest]
    fn zero_weights_fall_back_to_equal_shares() {
        let config = WeightConfig::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(config.normalised(), NormalisedWeights::EQUAL);
    }

    #[rstest]
    fn default_is_mid_slider_everywhere() {
        let config = WeightConfig::default();
        for factor in [
            WeightFactor::Distance,
            WeightFactor::Price,
            WeightFactor::NeighborhoodSafety,
            WeightFactor::Amenity,
        ] {
            assert_eq!(config.get(factor), 0.5);
        }
    }
}
