//! Move scripts: whitespace-separated move tokens, `#` starts a comment.
//!
//! A token is either `row,col` (play in the active sub-board) or
//! `board_row,board_col:row,col` (play in a named sub-board, selecting it if
//! a free choice is pending).

use std::{fs, path::Path, str::FromStr};

use crate::tictactoe::{GridPos, PlayOutcome, SubBoardId, SuperGame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptMove {
    Play(GridPos),
    PlayAt { board: SubBoardId, cell: GridPos },
}

impl ScriptMove {
    pub fn apply(self, game: &mut SuperGame) -> PlayOutcome {
        match self {
            ScriptMove::Play(cell) => game.play_cell(cell),
            ScriptMove::PlayAt { board, cell } => game.play_at(board, cell),
        }
    }
}

impl FromStr for ScriptMove {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((board, cell)) => Ok(ScriptMove::PlayAt {
                board: board.parse()?,
                cell: cell.parse()?,
            }),
            None => Ok(ScriptMove::Play(s.parse()?)),
        }
    }
}

pub fn parse_script(input: &str) -> crate::Result<Vec<ScriptMove>> {
    input
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(str::parse)
        .collect()
}

pub fn load_script(path: &Path) -> crate::Result<Vec<ScriptMove>> {
    let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
        operation: format!("read move script '{}'", path.display()),
        source,
    })?;
    parse_script(&contents)
}
