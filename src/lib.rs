//! Super Tic-Tac-Toe engine
//!
//! This crate provides:
//! - The game engine: nine sub-boards on a flat 81-cell board, move legality,
//!   sub-board and meta-board win detection, turn and active-board tracking
//! - Structured move results instead of console notices
//! - Console rendering of the nested board
//! - A CLI for interactive play and script replay

pub mod cli;
pub mod config;
pub mod error;
pub mod tictactoe;

pub use config::{GameConfig, NextBoardRule};
pub use error::{Error, Result};
pub use tictactoe::{PlayOutcome, Rejection, SuperGame};
