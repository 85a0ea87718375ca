//! Game options shared across commands

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::{
    config::{GameConfig, NextBoardRule},
    tictactoe::{Player, SubBoardId},
};

/// Flags that shape a new game. Values given here override `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOptions {
    /// TOML file with game settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for the starting sub-board
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which player moves first (`x` or `o`)
    #[arg(long)]
    pub first: Option<Player>,

    /// Starting sub-board as `row,col`
    #[arg(long)]
    pub start: Option<SubBoardId>,

    /// What happens when a move points at a resolved sub-board (`free` or `stay`)
    #[arg(long)]
    pub rule: Option<NextBoardRule>,
}

impl GameOptions {
    /// Merge the config file (if any) with the command-line overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(first) = self.first {
            config.first_player = first;
        }
        if let Some(start) = self.start {
            config.start = Some(start);
        }
        if let Some(rule) = self.rule {
            config.next_board_rule = rule;
        }

        Ok(config)
    }
}
