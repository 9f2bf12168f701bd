//! Territory records.
//!
//! A territory is a named map cell owned by one faction and garrisoned by a
//! non-negative number of troops.

use serde::{Deserialize, Serialize};

use super::label::{Faction, TerritoryName};

/// A single territory on the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    pub name: TerritoryName,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    /// Creates a territory, applying the name and faction length bounds.
    pub fn new(name: &str, owner: &str, troops: u32) -> Self {
        Territory {
            name: TerritoryName::truncated(name),
            owner: Faction::truncated(owner),
            troops,
        }
    }

    /// Returns true if the territory belongs to `faction`.
    pub fn is_owned_by(&self, faction: &Faction) -> bool {
        self.owner == *faction
    }

    /// Returns true if the territory has enough troops to launch an attack.
    pub fn can_attack(&self, min_troops: u32) -> bool {
        self.troops >= min_troops
    }
}
