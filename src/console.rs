//! Console prompts and setup.
//!
//! Wraps any `BufRead`/`Write` pair so the whole game can be driven from
//! stdin/stdout or from in-memory buffers in tests. End of input is reported
//! as `Ok(None)` rather than an error. Bytes that are not valid UTF-8 are
//! replaced with U+FFFD instead of failing the read.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Faction, Registry, Territory};
use crate::engine::{Player, SessionError};
use crate::protocol::{parse_count, parse_troops, InputError};

/// Line-oriented prompt reader.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    out: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Console {
            input,
            out,
            line: Vec::new(),
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Writes `prompt` and reads one line without its line terminator.
    /// Returns `None` at end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&self.line);
        Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompts until `parse` accepts a line. Rejected lines are reported and
    /// discarded. Returns `None` at end of input.
    pub fn prompt_parsed<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!(input = %line, error = %e, "input rejected");
                    writeln!(self.out, "Invalid entry: {}", e)?;
                }
            }
        }
    }
}

/// Reads the territory count and then every territory record.
///
/// Returns `None` if input ends during setup.
pub fn read_registry<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Registry>, SessionError> {
    let Some(count) =
        console.prompt_parsed("How many territories do you want to register? ", parse_count)?
    else {
        return Ok(None);
    };
    let mut registry = Registry::create(count)?;

    for i in 0..count {
        writeln!(console.out(), "\n--- Registering territory {} ---", i + 1)?;
        let Some(name) = console.prompt_line("Territory name: ")? else {
            return Ok(None);
        };
        let Some(owner) = console.prompt_line("Army color (e.g. Blue, Red): ")? else {
            return Ok(None);
        };
        let Some(troops) = console.prompt_parsed("Number of troops: ", parse_troops)? else {
            return Ok(None);
        };
        *registry.get_mut(i)? = Territory::new(&name, &owner, troops);
    }

    writeln!(console.out(), "\nInitial registration complete.")?;
    Ok(Some(registry))
}

/// Reads the player count and one faction per player.
///
/// Returns `None` if input ends during setup.
pub fn read_factions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Vec<Faction>>, SessionError> {
    let Some(count) = console.prompt_parsed("\nHow many players are taking part? ", parse_count)?
    else {
        return Ok(None);
    };
    let mut factions = Vec::new();
    factions
        .try_reserve_exact(count)
        .map_err(|_| SessionError::PlayerAllocation { count })?;

    for i in 0..count {
        let Some(color) = console.prompt_line(&format!("Army color of player {}: ", i + 1))? else {
            return Ok(None);
        };
        factions.push(Faction::truncated(&color));
    }
    Ok(Some(factions))
}

/// Writes the numbered territory listing.
pub fn write_map<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(out, "======================================")?;
    writeln!(out, "   WORLD MAP - CURRENT STATE")?;
    writeln!(out, "======================================")?;
    for (i, t) in registry.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (Army {}, Troops: {})",
            i + 1,
            t.name,
            t.owner,
            t.troops
        )?;
    }
    Ok(())
}

/// Writes every player's secret mission, once, at the start of the game.
pub fn write_missions<W: Write>(out: &mut W, players: &[Player]) -> io::Result<()> {
    writeln!(out, "\n======================================")?;
    writeln!(out, "   PLAYERS' SECRET MISSIONS")?;
    writeln!(out, "======================================")?;
    for (i, player) in players.iter().enumerate() {
        writeln!(
            out,
            "Player {} ({}): *** YOUR SECRET MISSION: {} ***",
            i + 1,
            player.faction,
            player.mission
        )?;
    }
    Ok(())
}
