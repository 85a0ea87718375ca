//! Text for the console: move notices and result tables

use crate::tictactoe::{
    ActiveBoard, GameStatus, MoveReport, Rejection, SelectOutcome, SubBoardStatus, SuperGame,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the final state of a game as a key-value table
pub fn print_result(game: &SuperGame) {
    print_section("Result");
    print_kv("Status", &game.status().to_string());
    print_kv("Moves", &game.history().len().to_string());
    print_kv("To move", &game.current_player().to_string());
    print_kv("Active sub-board", &game.active_board().to_string());
    let won: Vec<String> = game
        .sub_board_checks()
        .iter()
        .map(|status| match status {
            SubBoardStatus::InPlay => "-".to_string(),
            SubBoardStatus::Won(player) => player.to_string(),
            SubBoardStatus::Drawn => "=".to_string(),
        })
        .collect();
    print_kv("Sub-boards", &won.join(" "));
}

/// One line per thing that happened during an applied move
pub fn describe_report(report: &MoveReport) -> Vec<String> {
    let placed = report.placed;
    let mut notes = vec![format!(
        "{} played {} in sub-board {}",
        placed.player, placed.cell, placed.board
    )];

    if report.resolved_now {
        match report.sub_board {
            SubBoardStatus::Won(winner) => {
                notes.push(format!("Win sub-board: {} by {winner}", placed.board));
            }
            SubBoardStatus::Drawn => notes.push(format!("Sub-board {} is drawn", placed.board)),
            SubBoardStatus::InPlay => {}
        }
    }

    match report.status {
        GameStatus::Won(winner) => notes.push(format!("{winner} wins the game!")),
        GameStatus::Draw => notes.push("The game is a draw".to_string()),
        GameStatus::InProgress => {
            if let Some(target) = report.redirect_blocked {
                notes.push(format!("Sub-board {target} already resolved"));
                let next_player = placed.player.opponent();
                match report.next {
                    ActiveBoard::FreeChoice => {
                        notes.push(format!("{next_player} may choose any open sub-board"));
                    }
                    ActiveBoard::Fixed(board) => {
                        notes.push(format!("{next_player} stays in sub-board {board}"));
                    }
                }
            }
        }
    }

    notes
}

/// Notice for a refused move, phrased for the player who tried it
pub fn describe_rejection(reason: Rejection, game: &SuperGame) -> String {
    match (reason, game.status()) {
        (Rejection::GameAlreadyDecided, GameStatus::Won(winner)) => {
            format!("{winner} wins the game!")
        }
        (Rejection::GameAlreadyDecided, _) => "The game is over".to_string(),
        (Rejection::CellOccupied, _) => "Invalid move".to_string(),
        (other, _) => format!("Invalid move: {other}"),
    }
}

pub fn describe_select(outcome: SelectOutcome, game: &SuperGame) -> String {
    match outcome {
        SelectOutcome::Selected(board) => format!("Playing in sub-board {board}"),
        SelectOutcome::Rejected(reason) => describe_rejection(reason, game),
    }
}
