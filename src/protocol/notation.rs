//! Compact one-line map notation.
//!
//! A map is written as `;`-separated entries of the form
//! `<name>:<owner>:<troops>`, in registry order. An empty map is `-`.
//!
//! Example: `Brazil:Green:5;Peru:Green:3;Chile:Blue:1`
//!
//! The owner and troops are taken from the last two `:`-separated fields, so
//! a name may itself contain `:`. Names and owners are truncated to their
//! usual bounds.

use crate::board::{Registry, Territory};

/// Errors that can occur while parsing map notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("entry {index} is empty")]
    EmptyEntry { index: usize },

    #[error("entry '{0}' must have the form name:owner:troops")]
    MissingField(String),

    #[error("invalid troop count in entry '{0}'")]
    InvalidTroops(String),

    #[error("entry '{0}' has an empty owner")]
    EmptyOwner(String),
}

/// Parses map notation into a registry.
pub fn parse_map(s: &str) -> Result<Registry, NotationError> {
    let trimmed = s.trim();
    if trimmed == "-" || trimmed.is_empty() {
        return Ok(Registry::default());
    }

    let territories = trimmed
        .split(';')
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Registry::from_territories(territories))
}

fn parse_entry(index: usize, entry: &str) -> Result<Territory, NotationError> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(NotationError::EmptyEntry { index });
    }

    let mut fields = entry.rsplitn(3, ':');
    let troops = fields.next();
    let owner = fields.next();
    let name = fields.next();

    let (Some(troops), Some(owner), Some(name)) = (troops, owner, name) else {
        return Err(NotationError::MissingField(entry.to_string()));
    };

    let troops: u32 = troops
        .trim()
        .parse()
        .map_err(|_| NotationError::InvalidTroops(entry.to_string()))?;
    if owner.trim().is_empty() {
        return Err(NotationError::EmptyOwner(entry.to_string()));
    }

    Ok(Territory::new(name.trim(), owner.trim(), troops))
}

/// Encodes a registry in map notation.
pub fn encode_map(registry: &Registry) -> String {
    if registry.is_empty() {
        return "-".to_string();
    }
    registry
        .iter()
        .map(|t| format!("{}:{}:{}", t.name, t.owner, t.troops))
        .collect::<Vec<_>>()
        .join(";")
}
