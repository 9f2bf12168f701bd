//! Mission evaluation.
//!
//! Decides whether a faction has fulfilled its mission on the current map.
//! Every check is a single linear pass over the registry and never mutates it.

use tracing::debug;

use crate::board::{Faction, Registry, Territory};

use super::catalog::Mission;

/// Returns true if `faction` satisfies `mission` on `registry`.
pub fn evaluate(mission: &Mission, registry: &Registry, faction: &Faction) -> bool {
    let territories = registry.as_slice();
    let satisfied = match mission {
        Mission::ConsecutiveTerritories(n) => has_consecutive_run(territories, faction, *n),
        Mission::EliminateFaction(target) => !territories.iter().any(|t| t.is_owned_by(target)),
        Mission::MinimumTerritoryCount(n) => {
            territories.iter().filter(|t| t.is_owned_by(faction)).count() >= *n
        }
        // An empty map is never conquered.
        Mission::ControlAllTerritories => {
            !territories.is_empty() && territories.iter().all(|t| t.is_owned_by(faction))
        }
        Mission::MinimumTroopsInOneTerritory(n) => territories
            .iter()
            .any(|t| t.is_owned_by(faction) && t.troops > *n),
    };

    debug!(faction = %faction, mission = %mission, satisfied, "mission checked");
    satisfied
}

/// Scans for `n` territories owned by `faction` without an interruption in
/// registry order. The streak resets on every foreign territory.
fn has_consecutive_run(territories: &[Territory], faction: &Faction, n: usize) -> bool {
    let mut streak = 0;
    for t in territories {
        if t.is_owned_by(faction) {
            streak += 1;
            if streak >= n {
                return true;
            }
        } else {
            streak = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(owners: &[&str]) -> Registry {
        Registry::from_territories(
            owners
                .iter()
                .enumerate()
                .map(|(i, owner)| Territory::new(&format!("T{}", i + 1), owner, 1))
                .collect(),
        )
    }

    fn a() -> Faction {
        Faction::from("A")
    }

    #[test]
    fn consecutive_run_at_front() {
        let r = registry_of(&["A", "A", "A", "B"]);
        assert!(evaluate(&Mission::ConsecutiveTerritories(3), &r, &a()));
    }

    #[test]
    fn broken_run_does_not_count() {
        let r = registry_of(&["A", "B", "A", "A"]);
        assert!(!evaluate(&Mission::ConsecutiveTerritories(3), &r, &a()));
    }

    #[test]
    fn consecutive_run_at_back() {
        let r = registry_of(&["B", "A", "A", "A"]);
        assert!(evaluate(&Mission::ConsecutiveTerritories(3), &r, &a()));
    }

    #[test]
    fn consecutive_run_on_empty_map() {
        let r = Registry::default();
        assert!(!evaluate(&Mission::ConsecutiveTerritories(3), &r, &a()));
    }

    #[test]
    fn control_all_rejects_empty_map() {
        let r = Registry::default();
        assert!(!evaluate(&Mission::ControlAllTerritories, &r, &a()));
    }

    #[test]
    fn control_all_requires_every_territory() {
        let r = registry_of(&["A", "A", "A", "A"]);
        assert!(evaluate(&Mission::ControlAllTerritories, &r, &a()));

        for i in 0..r.len() {
            let mut flipped = r.clone();
            flipped.get_mut(i).unwrap().owner = Faction::from("B");
            assert!(!evaluate(&Mission::ControlAllTerritories, &flipped, &a()));
        }
    }

    #[test]
    fn eliminate_faction_ignores_the_evaluated_faction() {
        let target = Mission::EliminateFaction(Faction::from("Red"));
        let r = registry_of(&["A", "Red", "B"]);
        assert!(!evaluate(&target, &r, &a()));
        let r = registry_of(&["A", "B", "B"]);
        assert!(evaluate(&target, &r, &a()));
        assert!(evaluate(&target, &r, &Faction::from("C")));
    }

    #[test]
    fn minimum_count_binds_to_the_evaluated_faction() {
        let r = registry_of(&["B", "B", "B", "B", "A"]);
        let mission = Mission::MinimumTerritoryCount(4);
        assert!(!evaluate(&mission, &r, &a()));
        assert!(evaluate(&mission, &r, &Faction::from("B")));
    }

    #[test]
    fn minimum_count_non_contiguous() {
        let r = registry_of(&["A", "B", "A", "B", "A", "A"]);
        assert!(evaluate(&Mission::MinimumTerritoryCount(4), &r, &a()));
        assert!(!evaluate(&Mission::MinimumTerritoryCount(5), &r, &a()));
    }

    #[test]
    fn troop_threshold_is_strict() {
        let mut r = Registry::from_territories(vec![
            Territory::new("T1", "A", 10),
            Territory::new("T2", "B", 30),
        ]);
        let mission = Mission::MinimumTroopsInOneTerritory(10);
        assert!(!evaluate(&mission, &r, &a()));
        r.get_mut(0).unwrap().troops = 11;
        assert!(evaluate(&mission, &r, &a()));
    }
}
