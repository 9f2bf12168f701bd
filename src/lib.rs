//! Skirmish game library.
//!
//! Exposes the territory registry, dice combat, mission evaluation, console
//! protocol, and turn controller for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod console;
pub mod engine;
pub mod mission;
pub mod protocol;
pub mod record;
pub mod resolve;
