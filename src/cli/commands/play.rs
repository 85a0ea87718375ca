//! Play command - interactive game on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{
        config::GameOptions,
        output::{describe_rejection, describe_report, describe_select},
        script::ScriptMove,
    },
    tictactoe::{ActiveBoard, GameStatus, GridPos, PlayOutcome, SubBoardId, SuperGame},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game on the console")]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameOptions,
}

const HELP: &str = "\
Commands:
  <row> <col>           play in the active sub-board (also `row,col`)
  <R>,<C>:<row>,<col>   play in sub-board (R, C)
  select <row> <col>    pick a sub-board when the choice is free
  board                 show the board
  status                show whose turn it is and the result so far
  help                  show this help
  quit                  leave the game";

/// One line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(ScriptMove),
    Select(SubBoardId),
    Board,
    Status,
    Help,
    Quit,
}

fn parse_pos(parts: &[&str]) -> crate::Result<GridPos> {
    match parts {
        [single] => single.parse(),
        [row, col] => format!("{row},{col}").parse(),
        _ => Err(crate::Error::InvalidMoveToken {
            token: parts.join(" "),
            reason: "expected 'row col'".to_string(),
        }),
    }
}

pub fn parse_command(line: &str) -> crate::Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["board" | "b"] => Ok(Command::Board),
        ["status" | "winner" | "s"] => Ok(Command::Status),
        ["help" | "h" | "?"] => Ok(Command::Help),
        ["quit" | "q" | "exit"] => Ok(Command::Quit),
        ["select", rest @ ..] => Ok(Command::Select(parse_pos(rest)?)),
        [single] if single.contains(':') => Ok(Command::Move(single.parse()?)),
        rest => Ok(Command::Move(ScriptMove::Play(parse_pos(rest)?))),
    }
}

fn status_line(game: &SuperGame) -> String {
    match game.status() {
        GameStatus::InProgress => match game.active_board() {
            ActiveBoard::Fixed(board) => {
                format!("{} to move in sub-board {board}", game.current_player())
            }
            ActiveBoard::FreeChoice => {
                format!("{} to choose a sub-board", game.current_player())
            }
        },
        decided => format!("Game over: {decided}"),
    }
}

/// Drive a game from `input` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut SuperGame,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", game.draw_console())?;
    writeln!(out, "{}", status_line(game))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Move(mv) => match mv.apply(game) {
                PlayOutcome::Applied(report) => {
                    for note in describe_report(&report) {
                        writeln!(out, "{note}")?;
                    }
                    writeln!(out, "{}", game.draw_console())?;
                }
                PlayOutcome::Rejected(reason) => {
                    writeln!(out, "{}", describe_rejection(reason, game))?;
                }
            },
            Command::Select(board) => {
                let outcome = game.select(board);
                writeln!(out, "{}", describe_select(outcome, game))?;
            }
            Command::Board => writeln!(out, "{}", game.draw_console())?,
            Command::Status => {}
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        writeln!(out, "{}", status_line(game))?;
    }

    Ok(())
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.game.resolve()?;
    debug!(?config, "starting interactive game");
    let mut game = SuperGame::from_config(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut game, stdin.lock(), &mut stdout)
}
