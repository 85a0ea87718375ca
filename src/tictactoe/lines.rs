//! Winning lines and the index tables for the flat 81-cell board

use super::{Cell, Player};

/// Winning line indices on a 3x3 grid
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Number of cells on the whole board
pub const CELL_COUNT: usize = 81;

/// Flat index of a cell, laid out row-major over the full 9x9 grid.
pub const fn cell_index(
    super_row: usize,
    super_col: usize,
    sub_row: usize,
    sub_col: usize,
) -> usize {
    (super_row * 3 + sub_row) * 9 + super_col * 3 + sub_col
}

/// Flat indices of the nine cells of each sub-board, by sub-board index
pub const SUB_BOARD_CELLS: [[usize; 9]; 9] = {
    let mut table = [[0; 9]; 9];
    let mut board = 0;
    while board < 9 {
        let mut cell = 0;
        while cell < 9 {
            table[board][cell] = cell_index(board / 3, board % 3, cell / 3, cell % 3);
            cell += 1;
        }
        board += 1;
    }
    table
};

/// The eight winning lines of each sub-board, in flat indices
pub const SUB_BOARD_LINES: [[[usize; 3]; 8]; 9] = {
    let mut table = [[[0; 3]; 8]; 9];
    let mut board = 0;
    while board < 9 {
        let mut line = 0;
        while line < 8 {
            let mut k = 0;
            while k < 3 {
                table[board][line][k] = SUB_BOARD_CELLS[board][WINNING_LINES[line][k]];
                k += 1;
            }
            line += 1;
        }
        board += 1;
    }
    table
};

/// Utility for analyzing winning lines over any cell slice
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The owner of the first completed line, if any
    pub fn winner(cells: &[Cell], lines: &[[usize; 3]]) -> Option<Player> {
        lines.iter().find_map(|line| Self::line_owner(cells, line))
    }

    fn line_owner(cells: &[Cell], line: &[usize; 3]) -> Option<Player> {
        let owner = cells[line[0]].to_player()?;
        line[1..]
            .iter()
            .all(|&idx| cells[idx] == cells[line[0]])
            .then_some(owner)
    }
}
