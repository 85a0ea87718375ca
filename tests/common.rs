//! Shared helpers for the integration tests.
#![allow(dead_code)]

use super_ttt::tictactoe::{GridPos, MoveReport, PlayOutcome, SubBoardId, SuperGame};

pub fn pos(row: usize, col: usize) -> GridPos {
    GridPos::new(row, col).expect("test coordinates are in range")
}

/// Fresh default game with a fixed starting sub-board
pub fn game_at(row: usize, col: usize) -> SuperGame {
    SuperGame::starting_at(SubBoardId::new(row, col).expect("test coordinates are in range"))
}

/// Play a sequence of `(row, col)` moves, asserting each one is applied
pub fn play_all(game: &mut SuperGame, moves: &[(usize, usize)]) -> Vec<MoveReport> {
    moves
        .iter()
        .enumerate()
        .map(|(i, &(row, col))| match game.play(row, col) {
            Ok(PlayOutcome::Applied(report)) => report,
            other => panic!("move {} ({row}, {col}) was not applied: {other:?}", i + 1),
        })
        .collect()
}

/// Starting from sub-board (0, 0) with X to move, X wins (0, 0), (0, 1)
/// and (0, 2) through their middle or bottom rows while O keeps sending X
/// back. O's replies never line up, so the 17th move wins the top meta row.
pub const TOP_ROW_META_WIN: [(usize, usize); 17] = [
    (1, 0),
    (0, 0),
    (1, 1),
    (0, 0),
    (1, 2), // X wins (0, 0)
    (0, 1),
    (2, 0),
    (0, 1),
    (2, 1),
    (0, 1),
    (2, 2), // X wins (0, 1)
    (0, 2),
    (1, 0),
    (0, 2),
    (1, 1),
    (0, 2),
    (1, 2), // X wins (0, 2) and the game
];

/// Starting from sub-board (1, 1), X takes its top row while O answers in
/// the centre of (0, 0) and (0, 1).
pub const CENTRE_TOP_ROW: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 1), (0, 2)];
