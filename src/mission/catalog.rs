//! Mission types and the catalog they are drawn from.
//!
//! A mission is a secret win condition bound to one faction for the whole
//! session. Missions are drawn uniformly from a fixed catalog at setup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Faction;
use crate::resolve::DiceSource;

/// Faction targeted by the elimination mission of the standard catalog.
pub const STANDARD_ELIMINATION_TARGET: &str = "Red";

/// A win condition evaluated against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "param", rename_all = "snake_case")]
pub enum Mission {
    /// Hold this many territories in an unbroken run of registry order.
    ConsecutiveTerritories(usize),
    /// No territory may remain owned by this faction.
    EliminateFaction(Faction),
    /// Hold at least this many territories.
    MinimumTerritoryCount(usize),
    /// Own every territory on the map.
    ControlAllTerritories,
    /// Hold one territory with strictly more troops than this.
    MinimumTroopsInOneTerritory(u32),
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::ConsecutiveTerritories(n) => {
                write!(f, "Conquer {} territories in a row", n)
            }
            Mission::EliminateFaction(color) => {
                write!(f, "Eliminate every troop of the {} army", color)
            }
            Mission::MinimumTerritoryCount(n) => {
                write!(f, "Dominate at least {} territories", n)
            }
            Mission::ControlAllTerritories => write!(f, "Conquer every territory on the map"),
            Mission::MinimumTroopsInOneTerritory(n) => {
                write!(f, "Have more than {} troops in a single territory", n)
            }
        }
    }
}

/// Errors raised when building a catalog.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("mission catalog is empty")]
    Empty,
}

/// The fixed set of missions that can be assigned. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
}

impl MissionCatalog {
    /// Builds a catalog from an explicit list. The list must not be empty.
    pub fn new(missions: Vec<Mission>) -> Result<Self, CatalogError> {
        if missions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(MissionCatalog { missions })
    }

    /// The five standard missions.
    pub fn standard() -> Self {
        MissionCatalog {
            missions: vec![
                Mission::ConsecutiveTerritories(3),
                Mission::EliminateFaction(Faction::from(STANDARD_ELIMINATION_TARGET)),
                Mission::MinimumTerritoryCount(4),
                Mission::ControlAllTerritories,
                Mission::MinimumTroopsInOneTerritory(10),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Draws one mission uniformly at random.
    pub fn assign<D: DiceSource + ?Sized>(&self, dice: &mut D) -> Mission {
        let idx = dice.pick(self.missions.len());
        self.missions[idx].clone()
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        MissionCatalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{RngDice, ScriptedDice};

    #[test]
    fn standard_catalog_has_five_missions() {
        let catalog = MissionCatalog::standard();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.missions()[0], Mission::ConsecutiveTerritories(3));
        assert_eq!(
            catalog.missions()[1],
            Mission::EliminateFaction(Faction::from("Red"))
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(MissionCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn assign_uses_the_pick() {
        let catalog = MissionCatalog::standard();
        let mut dice = ScriptedDice::default().with_picks(&[3, 4]);
        assert_eq!(catalog.assign(&mut dice), Mission::ControlAllTerritories);
        assert_eq!(
            catalog.assign(&mut dice),
            Mission::MinimumTroopsInOneTerritory(10)
        );
    }

    #[test]
    fn assign_draws_every_mission_eventually() {
        let catalog = MissionCatalog::standard();
        let mut dice = RngDice::seeded(99);
        let mut seen = vec![false; catalog.len()];
        for _ in 0..500 {
            let m = catalog.assign(&mut dice);
            let idx = catalog.missions().iter().position(|c| *c == m).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn mission_text() {
        assert_eq!(
            Mission::ConsecutiveTerritories(3).to_string(),
            "Conquer 3 territories in a row"
        );
        assert_eq!(
            Mission::MinimumTroopsInOneTerritory(10).to_string(),
            "Have more than 10 troops in a single territory"
        );
        assert_eq!(
            Mission::EliminateFaction(Faction::from("Red")).to_string(),
            "Eliminate every troop of the Red army"
        );
    }

    #[test]
    fn mission_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Mission::MinimumTerritoryCount(4)).unwrap();
        assert_eq!(json, r#"{"kind":"minimum_territory_count","param":4}"#);
        let back: Mission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mission::MinimumTerritoryCount(4));
    }
}
