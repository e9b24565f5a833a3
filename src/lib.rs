//! Facade crate for the Spotcast sport-suitability engine.
//!
//! This crate re-exports the core domain types together with the weighted
//! scorer, the aptitude heuristic and catalogue ranking.

#![forbid(unsafe_code)]

pub use spotcast_core::{
    Aptitude, AptitudeSport, CompliancePolicy, HardStep, LinearRamp, Operator, RuleCatalogue,
    RuleDefect, Score, ScoreLabel, Scorer, ScoringError, SportId, SportRuleSet, VariableRule,
    WeatherSample, WeatherVariable,
};

pub use spotcast_scorer::{
    Assessment, AptitudeReadings, Ranking, ScoreBreakdown, Unscored, WeightedScorer, assess,
    classify, evaluate_rule, rank, score,
};
