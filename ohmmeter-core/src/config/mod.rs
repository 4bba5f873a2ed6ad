//! Configuration types
//!
//! Board-agnostic configuration structures and the embedded TOML parser.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
