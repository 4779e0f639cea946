//! Error types for match setup and turn validation

use thiserror::Error;

use crate::types::Team;

/// Configuration problems detected before a match starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board must be at least 4 columns wide and 1 row high, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid rule constants: {0}")]
    InvalidRules(&'static str),

    #[error("{team} home zone has {available} free cells but needs {required} pieces")]
    Starvation {
        team: Team,
        available: usize,
        required: usize,
    },
}

/// Reasons a move request is rejected by the turn controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the match is already over")]
    MatchOver,

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Team, got: Team },

    #[error("a move is still resolving")]
    MoveInProgress,

    #[error("column {column} is outside a board of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is not eligible for {team}")]
    ColumnNotEligible { column: usize, team: Team },
}
