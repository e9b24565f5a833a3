//! Adapter for admin-authored sport rule configuration.
//!
//! The admin backend speaks Spanish field names (`nombre_variable`,
//! `umbral_min`, `peso`, ...) and its own variable names (`waveHeight`,
//! `wind_gustValue`). English field names are accepted as aliases so
//! hand-written configuration files read naturally.

use log::debug;
use serde::Deserialize;
use spotcast_core::{
    Operator, RuleCatalogue, RuleDefect, ScoringError, SportId, SportRuleSet, VariableRule,
};

use crate::{DataError, resolve_variable};

const RULE_SET_DOCUMENT: &str = "rule set";
const CATALOGUE_DOCUMENT: &str = "rule catalogue";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSportId {
    Number(u64),
    Text(String),
}

impl RawSportId {
    fn into_text(self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RulePayload {
    #[serde(alias = "variable_name", alias = "variable")]
    nombre_variable: String,
    #[serde(alias = "operator")]
    operador: String,
    #[serde(default, alias = "threshold_min")]
    umbral_min: Option<f64>,
    #[serde(default, alias = "threshold_max")]
    umbral_max: Option<f64>,
    #[serde(default, alias = "weight")]
    peso: Option<f64>,
    #[serde(default, alias = "status")]
    estado: Option<String>,
}

impl RulePayload {
    fn is_enabled(&self) -> bool {
        self.estado.as_deref().is_none_or(|estado| {
            let normalised = estado.trim().to_ascii_lowercase();
            normalised == "activo" || normalised == "active"
        })
    }

    fn into_rule(self) -> Result<VariableRule, ScoringError> {
        let variable =
            resolve_variable(&self.nombre_variable).ok_or_else(|| ScoringError::InvalidRule {
                variable: self.nombre_variable.clone(),
                defect: RuleDefect::UnknownVariable,
            })?;
        let operator = self
            .operador
            .parse::<Operator>()
            .map_err(|defect| ScoringError::invalid_rule(variable, defect))?;
        VariableRule::from_parts(
            variable,
            operator,
            self.umbral_min,
            self.umbral_max,
            self.peso,
        )
    }
}

#[derive(Debug, Deserialize)]
struct RuleSetPayload {
    #[serde(alias = "id_deporte", alias = "sport_id")]
    id: RawSportId,
    #[serde(alias = "sport_name", alias = "name")]
    nombre: String,
    #[serde(default, alias = "description")]
    descripcion: Option<String>,
    #[serde(default, alias = "active")]
    activo: Option<bool>,
    #[serde(default, alias = "rules")]
    variables: Vec<RulePayload>,
}

impl RuleSetPayload {
    fn into_rule_set(self) -> Result<SportRuleSet, DataError> {
        let Self {
            id,
            nombre,
            descripcion,
            activo,
            variables,
        } = self;
        let sport_id = SportId::new(id.into_text()).map_err(|source| DataError::SportId {
            sport_name: nombre.clone(),
            source,
        })?;
        let mut rules = Vec::with_capacity(variables.len());
        for payload in variables {
            if !payload.is_enabled() {
                debug!(
                    "skipping disabled rule '{}' for sport '{sport_id}'",
                    payload.nombre_variable
                );
                continue;
            }
            let rule = payload.into_rule().map_err(|source| DataError::Rules {
                sport_name: nombre.clone(),
                source,
            })?;
            rules.push(rule);
        }
        let rule_set = SportRuleSet::new(sport_id, nombre.clone(), rules)
            .map_err(|source| DataError::Rules {
                sport_name: nombre,
                source,
            })?
            .with_description(descripcion.unwrap_or_default())
            .with_active(activo.unwrap_or(true));
        Ok(rule_set)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CataloguePayload {
    List(Vec<RuleSetPayload>),
    Wrapped {
        #[serde(alias = "deportes")]
        sports: Vec<RuleSetPayload>,
    },
}

/// Parse one sport's admin configuration.
///
/// A missing `peso` defaults to 1, a missing bound the operator ignores
/// defaults to 0, and rules whose `estado` is present but not `activo` are
/// skipped. A missing `activo` flag means the sport is active.
///
/// # Errors
/// Returns [`DataError::Json`] for malformed JSON, [`DataError::SportId`]
/// for a blank id and [`DataError::Rules`] when a rule names an unknown
/// variable or operator, omits a bound its operator reads, or duplicates
/// another rule's variable.
///
/// # Examples
/// ```
/// use spotcast_core::WeatherVariable;
/// use spotcast_data::parse_rule_set;
///
/// let json = r#"{
///     "id_deporte": 1,
///     "nombre": "Kitesurf",
///     "variables": [
///         {"nombre_variable": "wind_speed", "operador": "between", "umbral_min": 12, "umbral_max": 25, "peso": 10},
///         {"nombre_variable": "waveHeight", "operador": "max", "umbral_max": 2.5}
///     ]
/// }"#;
/// let kite = parse_rule_set(json)?;
/// assert_eq!(kite.sport_id().as_str(), "1");
/// assert_eq!(kite.rules()[1].variable, WeatherVariable::WaveHeight);
/// assert_eq!(kite.rules()[1].weight, 1.0);
/// # Ok::<(), spotcast_data::DataError>(())
/// ```
pub fn parse_rule_set(json: &str) -> Result<SportRuleSet, DataError> {
    let payload: RuleSetPayload =
        serde_json::from_str(json).map_err(|source| DataError::json(RULE_SET_DOCUMENT, source))?;
    payload.into_rule_set()
}

/// Parse every sport's admin configuration into a catalogue.
///
/// Accepts either a bare JSON array of sports or an object holding the
/// array under `sports` (or `deportes`). A later sport with the same id
/// replaces an earlier one.
///
/// # Errors
/// See [`parse_rule_set`].
pub fn parse_catalogue(json: &str) -> Result<RuleCatalogue, DataError> {
    let payload: CataloguePayload = serde_json::from_str(json)
        .map_err(|source| DataError::json(CATALOGUE_DOCUMENT, source))?;
    let sports = match payload {
        CataloguePayload::List(sports) | CataloguePayload::Wrapped { sports } => sports,
    };
    let mut catalogue = RuleCatalogue::new();
    for sport in sports {
        if let Some(previous) = catalogue.insert(sport.into_rule_set()?) {
            debug!("replaced earlier rules for sport '{}'", previous.sport_id());
        }
    }
    Ok(catalogue)
}
