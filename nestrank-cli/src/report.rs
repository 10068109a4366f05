//! Rating report assembly and output.

use std::io::Write;

use nestrank_core::{NormalisedWeights, PoiId, PropertyId, ScoreBoard, TravelMode};
use nestrank_scorer::RatingSession;
use serde::Serialize;

use crate::error::CliError;

/// The JSON document the `rate` subcommand emits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RatingReport {
    /// Travel mode the distance factor was computed with.
    pub(crate) travel_mode: TravelMode,
    /// POI the distance factor was computed against, when one was selected.
    pub(crate) selected_poi: Option<PoiId>,
    /// Normalised factor weights the totals were aggregated under.
    pub(crate) weights: NormalisedWeights,
    /// Candidates ordered best-first by total score.
    pub(crate) rankings: Vec<RankedProperty>,
    /// The full score state, including travel times, distances, and raw
    /// amenity surveys for display.
    pub(crate) scores: ScoreBoard,
}

/// One candidate row in the report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedProperty {
    /// Candidate identifier.
    pub(crate) property_id: PropertyId,
    /// Street address for display.
    pub(crate) address: String,
    /// Aggregated total score.
    pub(crate) total_score: f64,
    /// Distance factor score.
    pub(crate) distance_score: f64,
    /// Price factor score.
    pub(crate) price_score: f64,
    /// Safety factor score.
    pub(crate) safety_score: f64,
    /// Amenity factor score.
    pub(crate) amenity_score: f64,
}

/// Assemble the report from a scored session.
pub(crate) fn build_report(
    session: &RatingSession,
    travel_mode: TravelMode,
    selected_poi: Option<PoiId>,
) -> RatingReport {
    let board = session.board();
    let mut rankings: Vec<RankedProperty> = session
        .properties()
        .iter()
        .map(|property| RankedProperty {
            property_id: property.id.clone(),
            address: property.address.clone(),
            total_score: factor_or_zero(board.total_scores(), &property.id),
            distance_score: factor_or_zero(board.distance_scores(), &property.id),
            price_score: factor_or_zero(board.price_scores(), &property.id),
            safety_score: factor_or_zero(board.safety_scores(), &property.id),
            amenity_score: factor_or_zero(board.amenities_scores(), &property.id),
        })
        .collect();
    rankings.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    RatingReport {
        travel_mode,
        selected_poi,
        weights: session.weights().normalised(),
        rankings,
        scores: board.clone(),
    }
}

fn factor_or_zero(
    scores: &std::collections::BTreeMap<PropertyId, f64>,
    id: &PropertyId,
) -> f64 {
    scores.get(id).copied().unwrap_or(0.0)
}

/// Serialize the report as pretty JSON followed by a newline.
pub(crate) fn render_report(report: &RatingReport) -> Result<String, CliError> {
    let mut payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    Ok(payload)
}

/// Write the rendered report to the given writer.
pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &RatingReport,
) -> Result<(), CliError> {
    let payload = render_report(report)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)
}
