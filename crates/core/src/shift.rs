//! Column shift - rotates one whole column by a single row
//!
//! Every occupant of the column, obstacles included, moves one row in the shift
//! direction and the boundary row wraps around to the opposite end. The column is
//! read in full, cleared and rewritten, so no caller ever observes a partially
//! rotated column.

use crate::types::{Coord, Direction};
use crate::Board;

/// Rotate column `x` by one row
///
/// # Panics
///
/// Panics if `x` is not a column of `board`.
pub fn shift_column(board: &mut Board, x: usize, direction: Direction) {
    assert!(
        x < board.width(),
        "shift of column {} on a board of width {}",
        x,
        board.width()
    );

    let height = board.height() as i32;
    let column: Vec<_> = board.column(x).collect();
    for (y, cell) in column.into_iter().enumerate() {
        let target = direction.rotate_row(y as i32, height);
        board.set(Coord::new(x as i32, target), cell);
    }

    log::debug!("shifted column {} {}", x, direction.as_str());
}
