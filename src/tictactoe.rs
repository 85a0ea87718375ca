//! Super Tic-Tac-Toe: nine tic-tac-toe boards inside a tenth

pub mod board;
pub mod coords;
pub mod game;
pub mod lines;
pub mod render;
pub mod validation;

pub use board::{Cell, Player, SubBoard, SubBoardStatus};
pub use coords::{Axis, Coord, GridPos, SubBoardId};
pub use game::{
    ActiveBoard, GameStatus, GameSummary, Move, MoveReport, PlayOutcome, Rejection, SelectOutcome,
    SuperGame,
};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use render::{ConsoleView, draw_console};
