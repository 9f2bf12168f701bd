//! Dice combat between two territories.
//!
//! One call resolves a single exchange: each side rolls one die, the higher
//! roll takes one troop from the loser, and a defender brought to zero troops
//! is conquered. Legality (distinct records, distinct owners, enough troops)
//! is checked by the caller before invoking [`resolve_attack`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Faction, Territory};

use super::dice::DiceSource;

/// How an exchange with equal rolls is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Equal rolls leave both territories untouched.
    #[default]
    NoOp,
    /// Equal rolls count as a successful defense.
    DefenderWins,
}

/// Which side took the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    AttackerWins,
    DefenderWins,
    Tie,
}

/// Ownership transfer caused by a successful attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conquest {
    pub previous_owner: Faction,
    pub new_owner: Faction,
    /// Troops moved from the attacking territory into the conquered one.
    pub transferred: u32,
}

/// Full result of one call to [`resolve_attack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker_roll: u8,
    pub defender_roll: u8,
    pub verdict: Verdict,
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub conquest: Option<Conquest>,
}

impl CombatOutcome {
    /// Returns true if the exchange changed neither territory.
    pub fn is_noop(&self) -> bool {
        self.attacker_losses == 0 && self.defender_losses == 0 && self.conquest.is_none()
    }
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Verdict::AttackerWins => write!(
                f,
                "attacker wins ({} vs {}), defender loses {}",
                self.attacker_roll, self.defender_roll, self.defender_losses
            ),
            Verdict::DefenderWins => write!(
                f,
                "defense holds ({} vs {}), attacker loses {}",
                self.attacker_roll, self.defender_roll, self.attacker_losses
            ),
            Verdict::Tie if self.attacker_losses > 0 => write!(
                f,
                "tie ({} vs {}) goes to the defender, attacker loses {}",
                self.attacker_roll, self.defender_roll, self.attacker_losses
            ),
            Verdict::Tie => write!(
                f,
                "tie ({} vs {}), nothing changes",
                self.attacker_roll, self.defender_roll
            ),
        }
    }
}

/// Number of troops that follow the attacker into a conquered territory:
/// half the attacking garrison, but at least one whenever the attacker has
/// more than one troop.
pub fn conquest_transfer(attacker_troops: u32) -> u32 {
    let half = attacker_troops / 2;
    if half < 1 && attacker_troops > 1 {
        1
    } else {
        half
    }
}

/// Resolves one attack, mutating both territories in place.
///
/// Draws the attacker's roll, then the defender's, from `dice`. Troop counts
/// never go negative and the attacker's owner is never changed.
pub fn resolve_attack<D: DiceSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
    tie_policy: TiePolicy,
) -> CombatOutcome {
    let attacker_roll = dice.roll();
    let defender_roll = dice.roll();
    let rolls = (attacker_roll, defender_roll);

    let outcome = match attacker_roll.cmp(&defender_roll) {
        Ordering::Greater => attacker_wins(attacker, defender, rolls),
        Ordering::Less => defender_wins(attacker, rolls, Verdict::DefenderWins),
        Ordering::Equal => match tie_policy {
            TiePolicy::NoOp => CombatOutcome {
                attacker_roll,
                defender_roll,
                verdict: Verdict::Tie,
                attacker_losses: 0,
                defender_losses: 0,
                conquest: None,
            },
            TiePolicy::DefenderWins => defender_wins(attacker, rolls, Verdict::Tie),
        },
    };

    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_roll,
        defender_roll,
        verdict = ?outcome.verdict,
        "combat resolved"
    );
    outcome
}

fn attacker_wins(
    attacker: &mut Territory,
    defender: &mut Territory,
    (attacker_roll, defender_roll): (u8, u8),
) -> CombatOutcome {
    let defender_losses = defender.troops.min(1);
    defender.troops = defender.troops.saturating_sub(1);

    let conquest = if defender.troops == 0 {
        let transferred = conquest_transfer(attacker.troops);
        let previous_owner = std::mem::replace(&mut defender.owner, attacker.owner.clone());
        defender.troops = transferred;
        attacker.troops -= transferred;
        info!(
            territory = %defender.name,
            from = %previous_owner,
            to = %defender.owner,
            transferred,
            "territory conquered"
        );
        Some(Conquest {
            previous_owner,
            new_owner: defender.owner.clone(),
            transferred,
        })
    } else {
        None
    };

    CombatOutcome {
        attacker_roll,
        defender_roll,
        verdict: Verdict::AttackerWins,
        attacker_losses: 0,
        defender_losses,
        conquest,
    }
}

fn defender_wins(
    attacker: &mut Territory,
    (attacker_roll, defender_roll): (u8, u8),
    verdict: Verdict,
) -> CombatOutcome {
    let attacker_losses = attacker.troops.min(1);
    attacker.troops = attacker.troops.saturating_sub(1);
    CombatOutcome {
        attacker_roll,
        defender_roll,
        verdict,
        attacker_losses,
        defender_losses: 0,
        conquest: None,
    }
}
