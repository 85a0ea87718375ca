//! CLI infrastructure for playing and replaying games
//!
//! The binary in `src/bin/super_ttt.rs` only parses arguments; everything it
//! runs lives here so it can be driven from tests.

pub mod commands;
pub mod config;
pub mod output;
pub mod script;
