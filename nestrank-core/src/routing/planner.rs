//! Route-planner trait for the external directions collaborator.

use crate::poi::Poi;
use crate::property::Property;
use crate::travel_mode::TravelMode;

use super::error::RoutePlanError;
use super::leg::RouteLeg;

/// Fetch one route per candidate property for a selected POI.
///
/// Implementations must return `Err(RoutePlanError::EmptyInput)` when
/// `properties` is empty, and must emit the sentinel leg
/// ([`RouteLeg::unroutable`]) for any property they cannot route rather than
/// omitting it, so downstream scoring can distinguish "unroutable" from
/// "never asked".
///
/// # Examples
///
/// ```rust
/// use nestrank_core::{
///     Poi, Property, RouteLeg, RoutePlanError, RoutePlanner, TravelMode,
/// };
///
/// struct FlatPlanner;
///
/// impl RoutePlanner for FlatPlanner {
///     fn plan_routes(
///         &self,
///         _poi: &Poi,
///         _mode: TravelMode,
///         properties: &[Property],
///     ) -> Result<Vec<RouteLeg>, RoutePlanError> {
///         if properties.is_empty() {
///             return Err(RoutePlanError::EmptyInput);
///         }
///         Ok(properties
///             .iter()
///             .map(|p| RouteLeg::new(p.id.clone(), 1000.0, "600s"))
///             .collect())
///     }
/// }
///
/// let poi = Poi::new("poi-1", "1 Office Plaza");
/// let properties = vec![Property::new("prop-1", "12 High St")];
/// let legs = FlatPlanner.plan_routes(&poi, TravelMode::Walking, &properties)?;
/// assert_eq!(legs.len(), 1);
/// # Ok::<(), RoutePlanError>(())
/// ```
pub trait RoutePlanner {
    /// Return one leg per property from `properties` to `poi` using `mode`.
    fn plan_routes(
        &self,
        poi: &Poi,
        mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedRoutePlanner;
    use rstest::rstest;

    fn sample_properties() -> Vec<Property> {
        vec![
            Property::new("p1", "12 High St"),
            Property::new("p2", "9 Low Rd"),
        ]
    }

    #[rstest]
    fn returns_one_leg_per_property() {
        let planner = FixedRoutePlanner::with_legs(vec![
            RouteLeg::new("p1", 1000.0, "600s"),
            RouteLeg::new("p2", 500.0, "300s"),
        ]);
        let poi = Poi::new("poi-1", "somewhere");
        let legs = planner
            .plan_routes(&poi, TravelMode::Driving, &sample_properties())
            .expect("fixed planner should answer");
        assert_eq!(legs.len(), 2);
    }

    #[rstest]
    fn errors_on_empty_input() {
        let planner = FixedRoutePlanner::with_legs(Vec::new());
        let poi = Poi::new("poi-1", "somewhere");
        let err = planner
            .plan_routes(&poi, TravelMode::Walking, &[])
            .expect_err("expected EmptyInput for empty slice");
        assert_eq!(err, RoutePlanError::EmptyInput);
    }
}
