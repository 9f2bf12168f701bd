//! The territory registry.
//!
//! Owns the ordered, fixed-size collection of territories for a session.
//! Registry order matters: contiguity missions scan it front to back and the
//! console addresses territories by their 1-based position in it.

use serde::{Deserialize, Serialize};

use super::label::Faction;
use super::territory::Territory;

/// Errors raised by registry creation and lookup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("could not reserve memory for {count} territories")]
    Allocation { count: usize },

    #[error("territory index {index} out of range (registry holds {len})")]
    Index { index: usize, len: usize },

    #[error("territory index {0} given for both sides of a pair")]
    SameIndex(usize),
}

/// Fixed-size ordered collection of territories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Creates a registry of `count` zero-initialized territories.
    ///
    /// Fails with [`RegistryError::Allocation`] if the backing storage cannot
    /// be reserved.
    pub fn create(count: usize) -> Result<Self, RegistryError> {
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| RegistryError::Allocation { count })?;
        territories.resize_with(count, Territory::default);
        Ok(Registry { territories })
    }

    /// Wraps an already populated list of territories.
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        Registry { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Returns the territory at a 0-based index.
    pub fn get(&self, index: usize) -> Result<&Territory, RegistryError> {
        let len = self.len();
        self.territories
            .get(index)
            .ok_or(RegistryError::Index { index, len })
    }

    /// Returns the territory at a 0-based index for mutation.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory, RegistryError> {
        let len = self.len();
        self.territories
            .get_mut(index)
            .ok_or(RegistryError::Index { index, len })
    }

    /// Borrows two distinct territories mutably at once.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Territory, &mut Territory), RegistryError> {
        let len = self.len();
        for index in [first, second] {
            if index >= len {
                return Err(RegistryError::Index { index, len });
            }
        }
        if first == second {
            return Err(RegistryError::SameIndex(first));
        }

        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    pub fn as_slice(&self) -> &[Territory] {
        &self.territories
    }

    /// Number of territories owned by `faction`.
    pub fn count_owned_by(&self, faction: &Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .count()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.territories.iter()
    }
}
