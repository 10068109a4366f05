//! Caller-owned state for one scoring run.

use nestrank_core::{Poi, PoiId, Property, ScoreBoard, WeightConfig, WeightFactor};

/// Candidate set, preference weights, and score state for one rating run.
///
/// The session is the injection point for everything the scorers read:
/// properties and POIs stay read-only for the run, the weight configuration
/// is adjustable between aggregator runs, and the [`ScoreBoard`] collects
/// every scorer's output. Swapping the candidate set discards the board so
/// scores from a previous selection can never bleed into the next one.
///
/// # Examples
/// ```
/// use nestrank_core::{Poi, Property, WeightFactor};
/// use nestrank_scorer::RatingSession;
///
/// let mut session = RatingSession::new(
///     vec![Property::new("p1", "12 High St")],
///     vec![Poi::new("poi-1", "1 Office Plaza")],
/// );
/// session.set_weight(WeightFactor::Price, 0.9);
/// assert_eq!(session.weights().get(WeightFactor::Price), 0.9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RatingSession {
    properties: Vec<Property>,
    pois: Vec<Poi>,
    weights: WeightConfig,
    board: ScoreBoard,
}

impl RatingSession {
    /// Construct a session over a candidate set with default weights.
    #[must_use]
    pub fn new(properties: Vec<Property>, pois: Vec<Poi>) -> Self {
        Self {
            properties,
            pois,
            weights: WeightConfig::default(),
            board: ScoreBoard::default(),
        }
    }

    /// Replace the weight configuration while consuming `self`.
    #[must_use]
    pub const fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    /// The candidate properties for this run.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The user's points of interest for this run.
    #[must_use]
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Look up a POI by identifier.
    #[must_use]
    pub fn poi(&self, id: &PoiId) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.id == *id)
    }

    /// The current weight configuration.
    #[must_use]
    pub const fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Adjust one factor weight; the value is clamped into `[0.0, 1.0]`.
    pub fn set_weight(&mut self, factor: WeightFactor, value: f64) {
        self.weights.set(factor, value);
    }

    /// Replace the whole weight configuration.
    pub fn set_weights(&mut self, weights: WeightConfig) {
        self.weights = weights;
    }

    /// Read access to the score state.
    #[must_use]
    pub const fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// Write access to the score state.
    ///
    /// Intended for the scorers and for callers that manage their own
    /// recompute sequencing; each slot must be replaced whole.
    pub const fn board_mut(&mut self) -> &mut ScoreBoard {
        &mut self.board
    }

    /// Swap in a new candidate selection.
    ///
    /// The score board is reset: scores computed for the previous selection
    /// are discarded, not merged.
    pub fn replace_candidates(&mut self, properties: Vec<Property>, pois: Vec<Poi>) {
        self.properties = properties;
        self.pois = pois;
        self.board = ScoreBoard::default();
    }
}
