//! Text protocols.
//!
//! Parsing for the values typed at the console prompts and the compact
//! one-line map notation used to preload a map.

pub mod notation;
pub mod parser;

pub use notation::{encode_map, parse_map, NotationError};
pub use parser::{
    parse_attacker_choice, parse_count, parse_index, parse_troops, AttackerChoice, InputError,
    CHECK_MISSIONS_TOKEN,
};
