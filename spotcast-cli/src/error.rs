//! Error types emitted by the Spotcast CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use spotcast_core::SportIdError;
use spotcast_data::DataError;
use spotcast_scorer::Unscored;
use thiserror::Error;

/// Errors emitted by the Spotcast CLI.
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
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The `--sport` value is not a usable sport id.
    #[error("invalid sport id: {0}")]
    InvalidSport(#[source] SportIdError),
    /// The `--sport` or `--offers` value names a sport the heuristic cannot rate.
    #[error("{0}")]
    UnknownAptitudeSport(String),
    /// The ramp margin is not a positive finite number.
    #[error("ramp margin must be positive and finite, got {margin}")]
    InvalidRampMargin {
        /// The rejected margin.
        margin: f64,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        /// Flag naming the path.
        field: &'static str,
        /// The unreadable path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A canonical sample file did not decode.
    #[error("failed to parse sample JSON at {path:?}: {source}")]
    ParseSample {
        /// The sample path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// An upstream payload file did not map onto the canonical schema.
    #[error("failed to load {field} file {path:?}: {source}")]
    Payload {
        /// Flag naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Adapter failure.
        #[source]
        source: DataError,
    },
    /// The sport could not be scored and no fallback was requested.
    #[error("cannot score sport '{sport_id}': {reason}")]
    Unscored {
        /// Requested sport id.
        sport_id: String,
        /// Why scoring was not possible.
        reason: Unscored,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
