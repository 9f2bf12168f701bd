//! Secret missions.
//!
//! Holds the closed set of mission kinds, the catalog they are drawn from,
//! and the evaluator that checks them against the registry.

pub mod catalog;
pub mod evaluate;

pub use catalog::{CatalogError, Mission, MissionCatalog, STANDARD_ELIMINATION_TARGET};
pub use evaluate::evaluate;
