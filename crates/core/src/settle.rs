//! Settlement - gravity and walking relaxation
//!
//! After a shift the board relaxes one elementary move at a time. Each step scans
//! rows bottom-up (y ascending) and each row left to right, and moves the first
//! piece that can move:
//!
//! 1. **Fall** one row if the cell below is empty and the piece is above row 0.
//! 2. Otherwise **walk** one column in the team direction if that cell is on the
//!    board and empty.
//!
//! Walking never leaves the board: a piece standing on its exit column stays put
//! until the goal pass removes it. Every step lowers a piece or moves it closer to
//! its exit edge, so repeated stepping always reaches a stable board.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, Occupant};
use crate::Board;

/// Kind of elementary settlement move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Fall,
    Walk,
}

/// One elementary relocation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettleStep {
    pub kind: StepKind,
    pub occupant: Occupant,
    pub from: Coord,
    pub to: Coord,
}

/// Where the piece at `coord` would move next, if anywhere
fn next_move(board: &Board, coord: Coord) -> Option<(StepKind, Coord)> {
    let team = board.get(coord)?.team()?;

    let below = coord.below();
    if coord.y > 0 && board.is_empty(below) {
        return Some((StepKind::Fall, below));
    }

    let ahead = coord.offset(team.step(), 0);
    if board.in_bounds(ahead) && board.is_empty(ahead) {
        return Some((StepKind::Walk, ahead));
    }
    None
}

/// Perform a single elementary move; `None` when the board is stable
pub fn try_advance_one(board: &mut Board) -> Option<SettleStep> {
    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            let from = Coord::new(x, y);
            let Some((kind, to)) = next_move(board, from) else {
                continue;
            };
            let occupant = board.take(from)?;
            board.set(to, Some(occupant));
            log::trace!("{:?} {:?} {} -> {}", occupant, kind, from, to);
            return Some(SettleStep {
                kind,
                occupant,
                from,
                to,
            });
        }
    }
    None
}

/// Step until the board is stable; returns the number of steps taken
pub fn settle_fully(board: &mut Board) -> usize {
    let mut steps = 0;
    while try_advance_one(board).is_some() {
        steps += 1;
    }
    steps
}

/// Check that no piece can move
pub fn is_stable(board: &Board) -> bool {
    board
        .occupants()
        .all(|(coord, _)| next_move(board, coord).is_none())
}
