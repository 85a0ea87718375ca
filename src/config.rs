//! Game configuration.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Player, SubBoardId};

/// What happens when a move sends the opponent to a resolved sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextBoardRule {
    /// The opponent may pick any unresolved sub-board.
    #[default]
    FreeChoice,
    /// The active sub-board is left unchanged.
    Stay,
}

impl NextBoardRule {
    const EXPECTED: &'static str = "free, stay";
}

impl FromStr for NextBoardRule {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" | "free-choice" | "free_choice" => Ok(NextBoardRule::FreeChoice),
            "stay" => Ok(NextBoardRule::Stay),
            _ => Err(crate::Error::ParseNextBoardRule {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}

impl fmt::Display for NextBoardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextBoardRule::FreeChoice => write!(f, "free"),
            NextBoardRule::Stay => write!(f, "stay"),
        }
    }
}

/// Configuration for creating a game.
///
/// # Examples
///
/// ```
/// use super_ttt::{GameConfig, NextBoardRule, tictactoe::{Player, SubBoardId}};
///
/// let config = GameConfig::new()
///     .with_seed(42)
///     .with_first_player(Player::O)
///     .with_next_board_rule(NextBoardRule::Stay)
///     .with_start(SubBoardId::new(1, 1).unwrap());
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Player making the first move
    pub first_player: Player,
    /// Redirect rule for resolved sub-boards
    pub next_board_rule: NextBoardRule,
    /// Initial active sub-board; random when unset
    pub start: Option<SubBoardId>,
    /// Seed for picking the initial sub-board
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Defaults: X moves first, free choice, random start, no seed.
    pub fn new() -> Self {
        Self {
            first_player: Player::X,
            next_board_rule: NextBoardRule::default(),
            start: None,
            seed: None,
        }
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_next_board_rule(mut self, rule: NextBoardRule) -> Self {
        self.next_board_rule = rule;
        self
    }

    pub fn with_start(mut self, start: SubBoardId) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> crate::Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
