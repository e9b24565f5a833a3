//! Payload adapters for the Spotcast engine.
//!
//! Responsibilities:
//! - Map upstream variable names onto [`WeatherVariable`](spotcast_core::WeatherVariable).
//! - Parse admin rule configuration into validated rule sets and catalogues.
//! - Turn flat and daily-plus-marine forecast documents into samples.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `spotcast-scorer`).
//! - Operate on in-memory JSON text; reading files and calling HTTP
//!   providers is the caller's concern.
//!
//! Invariants:
//! - Readings a payload omits stay absent; nothing defaults to zero.
//! - Every rule set returned has passed core validation.

mod aliases;
mod error;
mod flat;
mod forecast;
mod rules;

pub use aliases::resolve_variable;
pub use error::DataError;
pub use flat::parse_flat_sample;
pub use forecast::{ForecastDate, ForecastDay, merge_forecast};
pub use rules::{parse_catalogue, parse_rule_set};
