//! Replay command - apply a move script and report the result

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, warn};

use crate::{
    cli::{
        config::GameOptions,
        output::{describe_rejection, describe_report, print_result},
        script::{ScriptMove, load_script, parse_script},
    },
    tictactoe::{PlayOutcome, SuperGame},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a move script")]
pub struct ReplayArgs {
    /// Script file with moves (`row,col` or `board_row,board_col:row,col`)
    pub script: Option<PathBuf>,

    /// Moves given inline instead of a file
    #[arg(long, short = 'm', conflicts_with = "script")]
    pub moves: Option<String>,

    /// Print a JSON summary instead of the board
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub game: GameOptions,
}

/// Apply every move in order, collecting the notices a player would see.
///
/// Rejected moves are reported and skipped, as in interactive play.
pub fn replay(game: &mut SuperGame, moves: &[ScriptMove]) -> Vec<String> {
    let mut notices = Vec::new();
    for (i, mv) in moves.iter().enumerate() {
        match mv.apply(game) {
            PlayOutcome::Applied(report) => notices.extend(describe_report(&report)),
            PlayOutcome::Rejected(reason) => {
                debug!(index = i, ?mv, %reason, "script move rejected");
                notices.push(format!(
                    "move {}: {}",
                    i + 1,
                    describe_rejection(reason, game)
                ));
            }
        }
    }
    notices
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let moves = match (&args.script, &args.moves) {
        (Some(path), _) => load_script(path)?,
        (None, Some(inline)) => parse_script(inline)?,
        (None, None) => bail!("provide a script file or --moves"),
    };

    let config = args.game.resolve()?;
    debug!(?config, moves = moves.len(), "replaying script");
    let mut game = SuperGame::from_config(&config);
    let notices = replay(&mut game, &moves);

    if !game.is_consistent() {
        warn!("replayed game failed its consistency check");
    }

    if args.json {
        println!("{}", game.summary().to_json()?);
        return Ok(());
    }

    for notice in &notices {
        println!("{notice}");
    }
    println!();
    print!("{}", game.draw_console());
    print_result(&game);
    Ok(())
}
