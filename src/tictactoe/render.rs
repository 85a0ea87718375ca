//! Console rendering of the nested board

use std::fmt;

use super::{game::SuperGame, lines::cell_index};

const COLUMN_HEADER: &str = "      0       1       2    ";
const TOP_FRAME: &str = "  ╔       ╦       ╦       ╗";
const BOTTOM_FRAME: &str = "  ╚       ╩       ╩       ╝";

/// Console view of a game: active sub-board line, column header, then each
/// meta row framed with its index on the middle line.
pub struct ConsoleView<'a>(pub &'a SuperGame);

impl fmt::Display for ConsoleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.0.cells();

        writeln!(f, "In sub-board: {}", self.0.active_board())?;
        writeln!(f, "{COLUMN_HEADER}")?;
        for super_row in 0..3 {
            writeln!(f, "{TOP_FRAME}")?;
            for sub_row in 0..3 {
                if sub_row == 1 {
                    write!(f, "{super_row} ║")?;
                } else {
                    write!(f, "  ║")?;
                }
                for super_col in 0..3 {
                    for sub_col in 0..3 {
                        let cell = cells[cell_index(super_row, super_col, sub_row, sub_col)];
                        write!(f, " {}", cell.to_char())?;
                    }
                    write!(f, " ║")?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{BOTTOM_FRAME}")?;
        }
        Ok(())
    }
}

pub fn draw_console(game: &SuperGame) -> String {
    ConsoleView(game).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::SubBoardId;

    #[test]
    fn empty_board_layout() {
        let game = SuperGame::starting_at(SubBoardId::new(0, 1).unwrap());
        let text = draw_console(&game);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "In sub-board: [0, 1]");
        assert_eq!(lines[1], "      0       1       2    ");
        assert_eq!(lines[2], TOP_FRAME);
        assert_eq!(lines[3], "  ║       ║       ║       ║");
        assert_eq!(lines[4], "0 ║       ║       ║       ║");
        assert_eq!(lines[6], BOTTOM_FRAME);
        assert_eq!(lines[9], "1 ║       ║       ║       ║");
        assert_eq!(lines[14], "2 ║       ║       ║       ║");
    }

    #[test]
    fn marks_land_in_the_right_place() {
        let mut game = SuperGame::starting_at(SubBoardId::new(1, 2).unwrap());
        assert!(game.play(2, 0).unwrap().is_applied());

        let text = draw_console(&game);
        let lines: Vec<&str> = text.lines().collect();

        // Meta row 1 spans lines 7..=11; sub-row 2 is line 10
        assert_eq!(lines[10], "  ║       ║       ║ X     ║");
        assert_eq!(lines[0], "In sub-board: [2, 0]");
    }

    #[test]
    fn won_sub_board_shows_its_glyph() {
        let mut game = SuperGame::starting_at(SubBoardId::new(1, 1).unwrap());
        // X takes the top row of (1, 1); O answers in the centre of (0, 0) and (0, 1)
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 1), (0, 2)] {
            assert!(game.play(row, col).unwrap().is_applied());
        }

        let text = draw_console(&game);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "In sub-board: [0, 2]");
        assert_eq!(lines[4], "0 ║   O   ║   O   ║       ║");
        assert_eq!(lines[8], "  ║       ║ *   * ║       ║");
        assert_eq!(lines[9], "1 ║       ║   *   ║       ║");
        assert_eq!(lines[10], "  ║       ║ *   * ║       ║");
    }
}
