//! Console input parser.
//!
//! Turns raw lines typed at the prompts into structured values. Only the
//! first whitespace-separated token of a line is considered. Counts and troops
//! must be non-negative integers; territory indices may be any integer and are
//! range-checked when the move is validated. Anything else is rejected with an
//! [`InputError`] so the caller can discard the line and ask again.

use std::num::IntErrorKind;

/// Errors for malformed console input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no input given")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' must not be negative")]
    Negative(String),

    #[error("'{0}' is too large")]
    TooLarge(String),
}

/// What the player asked for at the attacker prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackerChoice {
    /// `0`: leave the game.
    Quit,
    /// A 1-based territory index, not yet range-checked.
    Attack(i64),
    /// `m`: check every mission now.
    CheckMissions,
}

/// Token that requests a mission check at the attacker prompt.
pub const CHECK_MISSIONS_TOKEN: &str = "m";

fn first_token(line: &str) -> Result<&str, InputError> {
    line.split_whitespace().next().ok_or(InputError::Empty)
}

fn parse_non_negative(token: &str) -> Result<u64, InputError> {
    if let Some(digits) = token.strip_prefix('-') {
        return if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Err(InputError::Negative(token.to_string()))
        } else {
            Err(InputError::NotANumber(token.to_string()))
        };
    }
    token.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => InputError::TooLarge(token.to_string()),
        _ => InputError::NotANumber(token.to_string()),
    })
}

/// Parses a count (territories, players).
pub fn parse_count(line: &str) -> Result<usize, InputError> {
    let token = first_token(line)?;
    let value = parse_non_negative(token)?;
    usize::try_from(value).map_err(|_| InputError::TooLarge(token.to_string()))
}

/// Parses a troop count.
pub fn parse_troops(line: &str) -> Result<u32, InputError> {
    let token = first_token(line)?;
    let value = parse_non_negative(token)?;
    u32::try_from(value).map_err(|_| InputError::TooLarge(token.to_string()))
}

/// Parses a 1-based territory index. Range checking, including negative
/// indices, is left to validation.
pub fn parse_index(line: &str) -> Result<i64, InputError> {
    let token = first_token(line)?;
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::TooLarge(token.to_string())
        }
        _ => InputError::NotANumber(token.to_string()),
    })
}

/// Parses the attacker prompt: `0` quits, `m` checks missions, any other
/// integer selects the attacking territory.
pub fn parse_attacker_choice(line: &str) -> Result<AttackerChoice, InputError> {
    let token = first_token(line)?;
    if token.eq_ignore_ascii_case(CHECK_MISSIONS_TOKEN) {
        return Ok(AttackerChoice::CheckMissions);
    }
    match parse_index(token)? {
        0 => Ok(AttackerChoice::Quit),
        idx => Ok(AttackerChoice::Attack(idx)),
    }
}
