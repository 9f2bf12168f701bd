//! Combat resolution.
//!
//! Resolves a single dice exchange between two territories, drawing rolls
//! from an explicitly passed [`DiceSource`].

pub mod combat;
pub mod dice;

pub use combat::{
    conquest_transfer, resolve_attack, CombatOutcome, Conquest, TiePolicy, Verdict,
};
pub use dice::{clock_seed, DiceSource, RngDice, ScriptedDice, DIE_FACES};
