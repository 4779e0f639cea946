//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds one occupant.
//! Cells live in a flat vector in row-major order (`y * width + x`), with y = 0 as the
//! bottom row. Goal coordinates (x = -1 and x = width) are valid query targets that
//! always report empty; they are never stored.

use std::fmt;

use crate::types::{Cell, Coord, Occupant, Team};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate addresses an interior cell
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Occupant at `coord`; goal and other out-of-range coordinates are always empty
    pub fn get(&self, coord: Coord) -> Option<Occupant> {
        self.index(coord).and_then(|idx| self.cells[idx])
    }

    /// Place or clear the occupant at `coord`
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the interior; goal cells are never stored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord).unwrap_or_else(|| {
            panic!(
                "board write outside the {}x{} interior at {}",
                self.width, self.height, coord
            )
        });
        self.cells[idx] = cell;
    }

    /// Remove and return the occupant at `coord`
    pub fn take(&mut self, coord: Coord) -> Cell {
        let cell = self.get(coord);
        if cell.is_some() {
            self.set(coord, None);
        }
        cell
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Occupants of column `x` from the bottom row up
    ///
    /// # Panics
    ///
    /// Panics if `x` is not a column of the board.
    pub fn column(&self, x: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(
            x < self.width,
            "column {} on a board of width {}",
            x,
            self.width
        );
        (0..self.height).map(move |y| self.cells[y * self.width + x])
    }

    /// Iterate over all occupied cells in row-major order
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|occupant| {
                let x = (idx % self.width) as i32;
                let y = (idx / self.width) as i32;
                (Coord::new(x, y), occupant)
            })
        })
    }

    /// Number of pieces a team still has on the board
    pub fn piece_count(&self, team: Team) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(Occupant::Piece(team)))
            .count()
    }

    /// Columns (ascending) holding at least one piece of `team`
    pub fn team_columns(&self, team: Team) -> Vec<usize> {
        (0..self.width)
            .filter(|&x| {
                self.column(x)
                    .any(|cell| cell == Some(Occupant::Piece(team)))
            })
            .collect()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Parse a board from ASCII rows, top row first
    ///
    /// `.` is empty, `#` an obstacle, `a`/`b` a piece of that team.
    /// Returns `None` when rows are ragged, empty or contain unknown characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use mice_men_core::Board;
    /// use mice_men_core::types::{Coord, Occupant, Team};
    ///
    /// let board = Board::from_ascii(&["..b", "#.."]).unwrap();
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.get(Coord::new(2, 1)), Some(Occupant::Piece(Team::B)));
    /// assert_eq!(board.get(Coord::new(0, 0)), Some(Occupant::Obstacle));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut board = Self::new(width, height);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            let y = (height - 1 - row_idx) as i32;
            for (x, c) in row.chars().enumerate() {
                let cell = match c {
                    '.' => None,
                    other => Some(Occupant::from_char(other)?),
                };
                board.set(Coord::new(x as i32, y), cell);
            }
        }
        Some(board)
    }

    /// ASCII rows, top row first (inverse of [`Board::from_ascii`])
    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        self.get(Coord::new(x as i32, y as i32))
                            .map_or('.', |occupant| occupant.as_char())
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_ascii() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
