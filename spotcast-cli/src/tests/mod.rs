//! Shared test harness modules for the Spotcast CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod classify_unit;
mod helpers;
mod score_unit;
