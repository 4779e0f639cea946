//! Headless Mice Men runner (default binary).
//!
//! Plays one seeded match between two automated players and prints the final
//! board, or the final snapshot as JSON when `MICEMEN_JSON` is set. See
//! [`mice_men::runner`] for the environment variables.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::{StyledContent, Stylize};

use mice_men::core::{Board, Match, MatchOutcome};
use mice_men::runner::{run_match, RunnerConfig};
use mice_men::types::{Coord, Occupant, Team};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunnerConfig::from_env()?;
    log::info!(
        "seed {}, {} vs {}",
        config.seed,
        config.policy(Team::A).as_str(),
        config.policy(Team::B).as_str()
    );

    let game = run_match(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &game.snapshot())?;
        writeln!(out)?;
    } else {
        print_board(&mut out, game.board())?;
        print_summary(&mut out, &game)?;
    }
    Ok(())
}

fn styled(cell: Option<Occupant>) -> StyledContent<&'static str> {
    match cell {
        None => ".".dark_grey(),
        Some(Occupant::Obstacle) => "#".yellow(),
        Some(Occupant::Piece(Team::A)) => "a".red().bold(),
        Some(Occupant::Piece(Team::B)) => "b".blue().bold(),
    }
}

fn print_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for y in (0..board.height() as i32).rev() {
        for x in 0..board.width() as i32 {
            write!(out, "{}", styled(board.get(Coord::new(x, y))))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_summary(out: &mut impl Write, game: &Match) -> io::Result<()> {
    let scores = game.scores();
    let result = match game.state().outcome() {
        Some(MatchOutcome::Winner(team)) => format!("{} wins", team),
        Some(MatchOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    writeln!(
        out,
        "turn {}: {} {} - {} {}, {}",
        game.state().turn,
        Team::A,
        scores.get(Team::A),
        scores.get(Team::B),
        Team::B,
        result
    )
}
