//! Game state validation logic

use super::{
    board::{Cell, SubBoard, SubBoardStatus},
    coords::SubBoardId,
    game::{ActiveBoard, PlayOutcome, SuperGame},
};
use crate::config::GameConfig;

impl SuperGame {
    /// Check that the cached sub-board results agree with the cells and
    /// that replaying the recorded moves reproduces this exact state.
    pub fn is_consistent(&self) -> bool {
        self.sub_boards_match_checks() && self.replays_to_self()
    }

    /// Every resolved sub-board must show its outcome: won boards carry
    /// the winner's glyph, drawn boards are full, live boards have no line.
    pub fn sub_boards_match_checks(&self) -> bool {
        SubBoardId::all().all(|id| {
            let board = self.sub_board(id);
            match self.sub_board_status(id) {
                SubBoardStatus::Won(player) => board == SubBoard::decoration(player),
                SubBoardStatus::Drawn => {
                    !board.is_decorated() && board.evaluate() == SubBoardStatus::Drawn
                }
                SubBoardStatus::InPlay => {
                    !board.is_decorated() && board.evaluate() == SubBoardStatus::InPlay
                }
            }
        })
    }

    fn replays_to_self(&self) -> bool {
        let config = GameConfig::new()
            .with_start(self.start())
            .with_first_player(self.first_player())
            .with_next_board_rule(self.next_board_rule());
        let mut replay = SuperGame::from_config(&config);

        for mv in self.history() {
            if replay.current_player() != mv.player {
                return false;
            }
            if !matches!(replay.play_at(mv.board, mv.cell), PlayOutcome::Applied(_)) {
                return false;
            }
        }

        // A selection made after the last move is not part of the history
        let active_matches = match (replay.active_board(), self.active_board()) {
            (replayed, actual) if replayed == actual => true,
            (ActiveBoard::FreeChoice, ActiveBoard::Fixed(board)) => {
                !self.sub_board_status(board).is_resolved()
            }
            _ => false,
        };

        replay.cells() == self.cells()
            && replay.sub_board_checks() == self.sub_board_checks()
            && replay.status() == self.status()
            && replay.current_player() == self.current_player()
            && active_matches
    }

    /// Number of cells holding an X or O mark
    pub fn mark_count(&self) -> usize {
        self.cells()
            .iter()
            .filter(|&&c| matches!(c, Cell::X | Cell::O))
            .count()
    }
}
