//! Generator module - builds the starting board
//!
//! Layout rules:
//!
//! - **Border columns** (x = 0 and x = width-1): an obstacle on every row
//!   divisible by 3, leaving gaps the mice can walk out through.
//! - **Interior columns**: every cell is an obstacle with probability 1/2.
//! - **Mice**: each team samples random cells in its home zone until all of its
//!   pieces are placed, retrying on occupied cells. Team B is placed first.
//!
//! The home zone is checked for enough free cells before sampling, so sampling
//! terminates almost surely.

use crate::config::BoardConfig;
use crate::error::SetupError;
use crate::rng::GameRng;
use crate::types::{Coord, Occupant, Team, BORDER_OBSTACLE_PERIOD};
use crate::Board;

/// Generate a starting board from `config` using `rng`
pub fn generate_board(config: &BoardConfig, rng: &mut GameRng) -> Result<Board, SetupError> {
    config.validate()?;

    let mut board = Board::new(config.width, config.height);
    place_obstacles(&mut board, rng);

    for team in [Team::B, Team::A] {
        populate_team(&mut board, config, team, rng)?;
    }

    log::debug!(
        "generated {}x{} board (seed {}), {} obstacles",
        config.width,
        config.height,
        rng.seed(),
        board
            .occupants()
            .filter(|(_, o)| *o == Occupant::Obstacle)
            .count()
    );
    Ok(board)
}

fn place_obstacles(board: &mut Board, rng: &mut GameRng) {
    let last = board.width() as i32 - 1;
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 {
            let obstacle = if x == 0 || x == last {
                y % BORDER_OBSTACLE_PERIOD == 0
            } else {
                rng.gen_bool(0.5)
            };
            if obstacle {
                board.set(Coord::new(x, y), Some(Occupant::Obstacle));
            }
        }
    }
}

fn populate_team(
    board: &mut Board,
    config: &BoardConfig,
    team: Team,
    rng: &mut GameRng,
) -> Result<(), SetupError> {
    let (min_x, max_x) = config.home_columns(team);
    let required = config.pieces_per_team as usize;

    let available = (min_x..=max_x)
        .map(|x| board.column(x).filter(|cell| cell.is_none()).count())
        .sum::<usize>();
    if available < required {
        return Err(SetupError::Starvation {
            team,
            available,
            required,
        });
    }

    let mut placed = 0;
    while placed < required {
        let coord = Coord::new(
            rng.gen_range(min_x as i32..max_x as i32 + 1),
            rng.gen_range(0..board.height() as i32),
        );
        if board.is_empty(coord) {
            board.set(coord, Some(Occupant::Piece(team)));
            placed += 1;
        }
    }
    Ok(())
}
