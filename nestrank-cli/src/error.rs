//! Error types emitted by the nestrank CLI.
//!
//! Keep this error type reasonably small; most CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nestrank_data::{FixtureError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the nestrank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The travel mode string is not one of the supported constants.
    #[error("invalid travel mode '{value}' (expected WALKING, DRIVING, or TRANSIT)")]
    InvalidTravelMode {
        /// The rejected value.
        value: String,
    },
    /// The selected POI id does not appear in the POI file.
    #[error("POI '{id}' does not appear in the POI file")]
    UnknownPoi {
        /// The rejected identifier.
        id: String,
    },
    /// Opening an input file failed.
    #[error("failed to open input file at {path}")]
    OpenInput {
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse input file at {path}")]
    ParseInput {
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Loading a collaborator fixture file failed.
    #[error(transparent)]
    LoadFixture(#[from] FixtureError),
    /// Constructing an HTTP collaborator failed.
    #[error("failed to build provider for {base_url:?}: {source}")]
    BuildProvider {
        /// Backend base URL.
        base_url: String,
        /// Source error from provider construction.
        #[source]
        source: ProviderBuildError,
    },
    /// Serializing the rating report failed.
    #[error("failed to serialize rating report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the rating report failed.
    #[error("failed to write rating report: {0}")]
    WriteReport(#[source] std::io::Error),
}
