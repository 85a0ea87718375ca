//! Cells, players and the 3x3 sub-board

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{LineAnalyzer, WINNING_LINES};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
    /// Filler written over a won sub-board to draw its big glyph
    Marker,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Marker => '*',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            '*' => Some(Cell::Marker),
            _ => None,
        }
    }

    /// The player owning this cell, if it holds a mark
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty | Cell::Marker => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// Resolution state of a sub-board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubBoardStatus {
    #[default]
    InPlay,
    Won(Player),
    /// Full with no line; counts for nobody on the meta-board
    Drawn,
}

impl SubBoardStatus {
    pub fn is_resolved(self) -> bool {
        !matches!(self, SubBoardStatus::InPlay)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Cell used for this sub-board when checking meta-board lines
    pub fn to_cell(self) -> Cell {
        match self {
            SubBoardStatus::Won(player) => player.to_cell(),
            SubBoardStatus::InPlay | SubBoardStatus::Drawn => Cell::Empty,
        }
    }
}

const M: Cell = Cell::Marker;
const E: Cell = Cell::Empty;

/// Big "X": corners and centre filled
const X_GLYPH: [Cell; 9] = [M, E, M, E, M, E, M, E, M];

/// Big "O": ring filled, centre open
const O_GLYPH: [Cell; 9] = [M, M, M, M, E, M, M, M, M];

/// One of the nine inner 3x3 grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    pub cells: [Cell; 9],
}

impl SubBoard {
    pub fn new() -> Self {
        SubBoard {
            cells: [Cell::Empty; 9],
        }
    }

    /// The decorative pattern that replaces a sub-board won by `player`
    pub fn decoration(player: Player) -> Self {
        let cells = match player {
            Player::X => X_GLYPH,
            Player::O => O_GLYPH,
        };
        SubBoard { cells }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn is_decorated(&self) -> bool {
        self.cells.contains(&Cell::Marker)
    }

    /// Evaluate the marks on a live sub-board.
    ///
    /// Meaningless once the board is decorated; the engine keeps the
    /// resolved status separately for that reason.
    pub fn evaluate(&self) -> SubBoardStatus {
        if let Some(winner) = LineAnalyzer::winner(&self.cells, &WINNING_LINES) {
            SubBoardStatus::Won(winner)
        } else if self.is_full() {
            SubBoardStatus::Drawn
        } else {
            SubBoardStatus::InPlay
        }
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            let c = match cell {
                Cell::Empty => '.',
                other => other.to_char(),
            };
            write!(f, "{c}")?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> SubBoard {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        SubBoard { cells }
    }

    #[test]
    fn evaluates_win_draw_and_in_play() {
        assert_eq!(board("XXX OO. ...").evaluate(), SubBoardStatus::Won(Player::X));
        assert_eq!(board("XOX XOO OXX").evaluate(), SubBoardStatus::Drawn);
        assert_eq!(board("XO. ... ...").evaluate(), SubBoardStatus::InPlay);
    }

    #[test]
    fn decorations_match_the_glyphs() {
        let x = SubBoard::decoration(Player::X);
        assert_eq!(x.to_string(), "*.*\n.*.\n*.*");
        let o = SubBoard::decoration(Player::O);
        assert_eq!(o.to_string(), "***\n*.*\n***");
        assert!(x.is_decorated() && o.is_decorated());
        assert!(!SubBoard::new().is_decorated());
    }

    #[test]
    fn decorated_board_never_evaluates_as_won() {
        for player in [Player::X, Player::O] {
            assert!(
                SubBoard::decoration(player)
                    .evaluate()
                    .winner()
                    .is_none()
            );
        }
    }

    #[test]
    fn status_helpers() {
        assert!(!SubBoardStatus::InPlay.is_resolved());
        assert!(SubBoardStatus::Drawn.is_resolved());
        assert_eq!(SubBoardStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(SubBoardStatus::Drawn.to_cell(), Cell::Empty);
        assert_eq!(SubBoardStatus::Won(Player::X).to_cell(), Cell::X);
    }

    #[test]
    fn parses_players() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.to_string(), "X");
    }
}
