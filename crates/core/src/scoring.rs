//! Goal detection and scoring
//!
//! A piece standing on the board column next to its exit edge leaves the board on
//! the goal pass and scores one point for its team: team A from x = 0 (exit
//! x = -1), team B from x = width-1 (exit x = width). The pass runs on a settled
//! board and evaluates every row of both exit columns independently.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, Occupant, Team};
use crate::Board;

/// A piece that left the board through its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalExit {
    pub team: Team,
    /// Last board cell the piece occupied
    pub from: Coord,
}

/// Board column a team exits from
pub fn exit_column(board: &Board, team: Team) -> i32 {
    match team {
        Team::A => 0,
        Team::B => board.width() as i32 - 1,
    }
}

/// Goal cell just beyond the exit column
pub fn goal_column(board: &Board, team: Team) -> i32 {
    exit_column(board, team) + team.step()
}

/// Remove every piece standing on its exit column
///
/// Returns the exits in row order (A before B within a row).
pub fn collect_exits(board: &mut Board) -> Vec<GoalExit> {
    let mut exits = Vec::new();
    for y in 0..board.height() as i32 {
        for team in Team::ALL {
            let from = Coord::new(exit_column(board, team), y);
            let goal = Coord::new(goal_column(board, team), y);
            if board.get(from) == Some(Occupant::Piece(team)) && board.is_empty(goal) {
                board.set(from, None);
                log::debug!("{} scores from {}", team, from);
                exits.push(GoalExit { team, from });
            }
        }
    }
    exits
}

/// Per-team score tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Scores([u32; 2]);

impl Scores {
    pub fn new(a: u32, b: u32) -> Self {
        Self([a, b])
    }

    pub fn get(&self, team: Team) -> u32 {
        self.0[team.index()]
    }

    /// Credit one point per exit
    pub fn credit(&mut self, exits: &[GoalExit]) {
        for exit in exits {
            self.0[exit.team.index()] += 1;
        }
    }

    /// Score difference from `team`'s point of view
    pub fn margin(&self, team: Team) -> i64 {
        i64::from(self.get(team)) - i64::from(self.get(team.opponent()))
    }

    /// Lowest of the two scores
    pub fn min(&self) -> u32 {
        self.0[0].min(self.0[1])
    }
}
