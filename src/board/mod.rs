//! Board representation.
//!
//! Contains the bounded label types, territory records, and the ordered
//! territory registry that combat and mission evaluation both operate on.

pub mod label;
pub mod registry;
pub mod territory;

pub use label::{BoundedString, Faction, TerritoryName, FACTION_MAX_LEN, NAME_MAX_LEN};
pub use registry::{Registry, RegistryError};
pub use territory::Territory;
