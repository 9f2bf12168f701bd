//! Random sources for dice rolls and mission draws.
//!
//! The engine never touches a global generator: every roll goes through a
//! [`DiceSource`] handle that the caller owns and threads through combat and
//! mission assignment. [`RngDice`] wraps any `rand` generator;
//! [`ScriptedDice`] replays a fixed sequence for deterministic play.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of faces on a combat die.
pub const DIE_FACES: u8 = 6;

/// A source of die rolls and uniform index picks.
pub trait DiceSource {
    /// Rolls one die, returning a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> u8;

    /// Picks an index uniformly from `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// A dice source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<SmallRng> {
    /// Creates a small fast generator seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        RngDice::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Seed derived from the wall clock, in whole seconds since the Unix epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A dice source that cycles through fixed sequences.
///
/// Rolls are clamped into `1..=DIE_FACES` and picks are reduced modulo the
/// requested length. An empty sequence yields 1 for rolls and 0 for picks.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    picks: Vec<usize>,
    next_roll: usize,
    next_pick: usize,
}

impl ScriptedDice {
    /// Creates a source that replays `rolls` in order, wrapping around.
    pub fn new(rolls: &[u8]) -> Self {
        ScriptedDice {
            rolls: rolls.to_vec(),
            ..ScriptedDice::default()
        }
    }

    /// Sets the sequence used for index picks.
    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks = picks.to_vec();
        self
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.rolls.is_empty() {
            return 1;
        }
        let value = self.rolls[self.next_roll % self.rolls.len()];
        self.next_roll += 1;
        value.clamp(1, DIE_FACES)
    }

    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value % len
    }
}
