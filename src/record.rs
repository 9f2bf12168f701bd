//! End-of-session record.
//!
//! Captures the final map, the players with their missions, and how the
//! session ended, and writes it as a single JSON document.

use std::io::Write;

use serde::Serialize;

use crate::board::Registry;
use crate::engine::{Game, Player, Termination};

/// Summary of a finished session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    /// Seed the dice were drawn from.
    pub seed: u64,
    /// Attacks resolved during the session.
    pub attacks: u32,
    pub termination: Termination,
    pub territories: Registry,
    pub players: Vec<Player>,
}

impl SessionRecord {
    pub fn new(seed: u64, game: &Game, termination: Termination) -> Self {
        SessionRecord {
            seed,
            attacks: game.attacks(),
            termination,
            territories: game.registry().clone(),
            players: game.players().to_vec(),
        }
    }
}

/// Writes a record as one line of JSON.
pub fn write_record<W: Write>(record: &SessionRecord, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    out.flush()
}
