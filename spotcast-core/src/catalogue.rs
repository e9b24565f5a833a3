//! Explicitly passed collection of every sport's rule set.
//!
//! Callers build a catalogue from admin configuration and hand it to the
//! scoring functions instead of relying on process-wide state. Sports are
//! activated and deactivated in place; the catalogue offers no removal.

use std::collections::BTreeMap;

use crate::{SportId, SportRuleSet};

/// Rule sets keyed by sport identifier, iterated in identifier order.
///
/// # Examples
/// ```
/// use spotcast_core::{RuleCatalogue, SportId, SportRuleSet};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kayak = SportRuleSet::new(SportId::new("kayak")?, "Kayak", Vec::new())?;
/// let mut catalogue = RuleCatalogue::new();
/// catalogue.insert(kayak);
/// let id = SportId::new("kayak")?;
/// assert!(catalogue.deactivate(&id));
/// assert_eq!(catalogue.active().count(), 0);
/// assert_eq!(catalogue.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleCatalogue {
    sports: BTreeMap<SportId, SportRuleSet>,
}

impl RuleCatalogue {
    /// Construct an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the rule set for its sport, returning the previous one.
    pub fn insert(&mut self, rule_set: SportRuleSet) -> Option<SportRuleSet> {
        self.sports.insert(rule_set.sport_id().clone(), rule_set)
    }

    /// Look up a sport's rule set.
    pub fn get(&self, sport_id: &SportId) -> Option<&SportRuleSet> {
        self.sports.get(sport_id)
    }

    /// Activate a sport. Returns `false` when the sport is unknown.
    pub fn activate(&mut self, sport_id: &SportId) -> bool {
        self.sports
            .get_mut(sport_id)
            .map(SportRuleSet::activate)
            .is_some()
    }

    /// Deactivate a sport. Returns `false` when the sport is unknown.
    pub fn deactivate(&mut self, sport_id: &SportId) -> bool {
        self.sports
            .get_mut(sport_id)
            .map(SportRuleSet::deactivate)
            .is_some()
    }

    /// Iterate over every rule set.
    pub fn iter(&self) -> impl Iterator<Item = &SportRuleSet> {
        self.sports.values()
    }

    /// Iterate over the active rule sets only.
    pub fn active(&self) -> impl Iterator<Item = &SportRuleSet> {
        self.iter().filter(|rule_set| rule_set.is_active())
    }

    /// Number of sports, active or not.
    pub fn len(&self) -> usize {
        self.sports.len()
    }

    /// Report whether the catalogue holds no sports.
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}

impl FromIterator<SportRuleSet> for RuleCatalogue {
    fn from_iter<I: IntoIterator<Item = SportRuleSet>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for rule_set in iter {
            catalogue.insert(rule_set);
        }
        catalogue
    }
}
