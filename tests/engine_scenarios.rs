//! End-to-end scenarios for the Super Tic-Tac-Toe engine

mod common;

use common::{CENTRE_TOP_ROW, TOP_ROW_META_WIN, game_at, play_all, pos};
use rand::{SeedableRng, rngs::StdRng};
use super_ttt::{
    GameConfig, NextBoardRule,
    tictactoe::{
        ActiveBoard, Cell, GameStatus, PlayOutcome, Player, Rejection, SelectOutcome, SubBoard,
        SubBoardStatus, SuperGame,
    },
};

fn count(game: &SuperGame, cell: Cell) -> usize {
    game.cells().iter().filter(|&&c| c == cell).count()
}

mod opening {
    use super::*;

    #[test]
    fn first_moves_from_a_random_start() {
        let mut game = SuperGame::new(&mut StdRng::seed_from_u64(2024));
        let start = game.active_board().fixed().expect("game starts on a fixed sub-board");

        play_all(&mut game, &[(0, 0)]);
        assert_eq!(count(&game, Cell::X), 1);
        assert_eq!(game.cell(start, pos(0, 0)), Cell::X);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.active_board(), ActiveBoard::Fixed(pos(0, 0)));
        assert_eq!(game.winner(), None);

        play_all(&mut game, &[(1, 1)]);
        assert_eq!(count(&game, Cell::X), 1);
        assert_eq!(count(&game, Cell::O), 1);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn same_seed_same_start() {
        let a = SuperGame::new(&mut StdRng::seed_from_u64(5));
        let b = SuperGame::new(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}

mod illegal_moves {
    use super::*;

    #[test]
    fn occupied_cell_keeps_turn_and_board() {
        let mut game = game_at(2, 0);
        play_all(&mut game, &[(2, 0)]); // X sends O back into (2, 0)
        let player = game.current_player();
        let active = game.active_board();

        assert_eq!(
            game.play(2, 0).unwrap(),
            PlayOutcome::Rejected(Rejection::CellOccupied)
        );
        assert_eq!(game.current_player(), player);
        assert_eq!(game.active_board(), active);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut game = game_at(0, 0);
        let err = game.play(0, 3).unwrap_err();
        assert_eq!(err.to_string(), "column 3 is out of bounds (must be 0-2)");
        assert!(game.history().is_empty());
    }
}

mod sub_board_wins {
    use super::*;

    #[test]
    fn top_row_of_centre_board() {
        let mut game = game_at(1, 1);
        let reports = play_all(&mut game, &CENTRE_TOP_ROW);

        let last = reports.last().unwrap();
        assert!(last.resolved_now);
        assert_eq!(last.sub_board, SubBoardStatus::Won(Player::X));
        assert_eq!(game.sub_board_checks()[4], SubBoardStatus::Won(Player::X));
        assert_eq!(game.sub_board(pos(1, 1)), SubBoard::decoration(Player::X));
        assert_eq!(game.winner(), None);
        assert_eq!(game.active_board(), ActiveBoard::Fixed(pos(0, 2)));
    }

    #[test]
    fn won_board_is_frozen() {
        let mut game = game_at(1, 1);
        play_all(&mut game, &CENTRE_TOP_ROW);
        let frozen = game.sub_board(pos(1, 1));

        // O in (0, 2) at (1, 1) points X at the won centre board
        let report = play_all(&mut game, &[(1, 1)]).remove(0);
        assert_eq!(report.redirect_blocked, Some(pos(1, 1)));
        assert_eq!(
            game.play_at(pos(1, 1), pos(1, 0)),
            PlayOutcome::Rejected(Rejection::SubBoardResolved)
        );
        assert_eq!(game.sub_board(pos(1, 1)), frozen);
    }
}

mod meta_wins {
    use super::*;

    #[test]
    fn two_boards_in_a_row_do_not_win() {
        let mut game = game_at(0, 0);
        play_all(&mut game, &TOP_ROW_META_WIN[..11]);

        assert_eq!(game.sub_board_status(pos(0, 0)), SubBoardStatus::Won(Player::X));
        assert_eq!(game.sub_board_status(pos(0, 1)), SubBoardStatus::Won(Player::X));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn third_board_in_a_row_wins() {
        let mut game = game_at(0, 0);
        let reports = play_all(&mut game, &TOP_ROW_META_WIN);

        assert_eq!(reports.last().unwrap().winner(), Some(Player::X));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.winner(), Some(Player::X));
        // No O sub-board was completed along the way
        assert!(
            game.sub_board_checks()
                .iter()
                .all(|s| s.winner() != Some(Player::O))
        );
        assert!(game.is_consistent());
    }

    #[test]
    fn decided_game_ignores_further_requests() {
        let mut game = game_at(0, 0);
        play_all(&mut game, &TOP_ROW_META_WIN);
        let before = game.clone();

        for (row, col) in [(0, 0), (2, 2), (1, 1)] {
            assert_eq!(
                game.play(row, col).unwrap(),
                PlayOutcome::Rejected(Rejection::GameAlreadyDecided)
            );
        }
        assert_eq!(
            game.select_sub_board(2, 2).unwrap(),
            SelectOutcome::Rejected(Rejection::GameAlreadyDecided)
        );
        assert_eq!(
            game.play_at(pos(2, 2), pos(0, 0)),
            PlayOutcome::Rejected(Rejection::GameAlreadyDecided)
        );
        assert_eq!(game, before);
        assert!(game.legal_moves().is_empty());
    }
}

mod resolved_redirects {
    use super::*;

    /// First five moves of the meta-win line, then O points X at the won (0, 0).
    const OPENING: [(usize, usize); 6] = [(1, 0), (0, 0), (1, 1), (0, 0), (1, 2), (0, 0)];

    #[test]
    fn free_choice_by_default() {
        let mut game = game_at(0, 0);
        let report = play_all(&mut game, &OPENING).pop().unwrap();

        assert_eq!(report.redirect_blocked, Some(pos(0, 0)));
        assert_eq!(game.active_board(), ActiveBoard::FreeChoice);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.selectable_sub_boards().len(), 8);

        assert_eq!(
            game.play(1, 1).unwrap(),
            PlayOutcome::Rejected(Rejection::SubBoardNotChosen)
        );
        assert_eq!(
            game.select_sub_board(0, 0).unwrap(),
            SelectOutcome::Rejected(Rejection::SubBoardResolved)
        );
        assert_eq!(
            game.select_sub_board(2, 2).unwrap(),
            SelectOutcome::Selected(pos(2, 2))
        );
        assert_eq!(game.current_player(), Player::X);

        let report = play_all(&mut game, &[(1, 1)]).remove(0);
        assert_eq!(report.placed.board, pos(2, 2));
        assert_eq!(game.active_board(), ActiveBoard::Fixed(pos(1, 1)));
    }

    #[test]
    fn stay_rule_keeps_the_old_board() {
        let config = GameConfig::new()
            .with_start(pos(0, 0))
            .with_next_board_rule(NextBoardRule::Stay);
        let mut game = SuperGame::from_config(&config);
        let report = play_all(&mut game, &OPENING).pop().unwrap();

        assert_eq!(report.redirect_blocked, Some(pos(0, 0)));
        // O played in (1, 2); X is left there
        assert_eq!(game.active_board(), ActiveBoard::Fixed(pos(1, 2)));
        assert_eq!(game.current_player(), Player::X);
        assert!(game.selectable_sub_boards().is_empty());
        assert!(!game.legal_moves().is_empty());
    }
}
