//! Bounded owned strings for territory names and faction identifiers.
//!
//! Every label is cut at its first line break and truncated to at most `MAX`
//! characters on construction, so a stored label can never exceed its bound.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of a territory name, in characters.
pub const NAME_MAX_LEN: usize = 29;

/// Maximum length of a faction (army color) identifier, in characters.
pub const FACTION_MAX_LEN: usize = 9;

/// An owned string holding at most `MAX` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BoundedString<const MAX: usize>(String);

/// The display name of a territory.
pub type TerritoryName = BoundedString<NAME_MAX_LEN>;

/// A faction identifier: the owner field of a territory and the subject of a mission.
pub type Faction = BoundedString<FACTION_MAX_LEN>;

impl<const MAX: usize> BoundedString<MAX> {
    /// Builds a label from raw input, dropping everything from the first
    /// line break on and keeping at most `MAX` characters.
    pub fn truncated(raw: &str) -> Self {
        let line = raw.split(['\n', '\r']).next().unwrap_or("");
        let end = line
            .char_indices()
            .nth(MAX)
            .map_or(line.len(), |(idx, _)| idx);
        BoundedString(line[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const MAX: usize> From<&str> for BoundedString<MAX> {
    fn from(raw: &str) -> Self {
        Self::truncated(raw)
    }
}

impl<const MAX: usize> From<String> for BoundedString<MAX> {
    fn from(raw: String) -> Self {
        Self::truncated(&raw)
    }
}

impl<const MAX: usize> From<BoundedString<MAX>> for String {
    fn from(label: BoundedString<MAX>) -> Self {
        label.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedString<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedString<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
