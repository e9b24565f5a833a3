//! Error types produced by the payload adapters.

use spotcast_core::{ScoringError, SportIdError};
use thiserror::Error;

/// Errors produced while mapping upstream payloads onto the canonical schema.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("failed to parse {document} payload: {source}")]
    Json {
        /// Which payload was being parsed.
        document: &'static str,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A sport carried a blank identifier.
    #[error("sport '{sport_name}' has an invalid id: {source}")]
    SportId {
        /// Name of the offending sport.
        sport_name: String,
        /// Validation failure.
        #[source]
        source: SportIdError,
    },
    /// A sport's rules failed validation.
    #[error("rules for sport '{sport_name}' are invalid: {source}")]
    Rules {
        /// Name of the offending sport.
        sport_name: String,
        /// Validation failure.
        #[source]
        source: ScoringError,
    },
    /// A flat weather payload was not a JSON object.
    #[error("flat weather payload must be a JSON object")]
    NotAnObject,
    /// A date was not in `YYYY-MM-DD` form.
    #[error("'{text}' is not a YYYY-MM-DD date")]
    InvalidDate {
        /// The rejected text.
        text: String,
    },
    /// A known reading held something other than a number or `null`.
    #[error("reading '{field}' must be a number or null")]
    NonNumericReading {
        /// Payload field holding the value.
        field: String,
    },
}

impl DataError {
    pub(crate) const fn json(document: &'static str, source: serde_json::Error) -> Self {
        Self::Json { document, source }
    }
}
