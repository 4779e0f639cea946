//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the board, the rules that move pieces around it, and the
//! turn controller. It has **no dependencies** on rendering, input or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same board and the same match
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: usable headless, from a terminal runner or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: the grid and its ASCII form
//! - [`generator`]: border trench, random cheese and random mice
//! - [`shift`]: circular rotation of a single column
//! - [`settle`]: gravity and walking, one elementary move at a time
//! - [`scoring`]: goal detection and per-team scores
//! - [`history`]: per-team memory of shifted columns
//! - [`match_state`]: eligible columns, committing moves, win and draw detection
//! - [`snapshot`]: serializable view of a match
//!
//! # Game Rules
//!
//! - **Shift**: the mover rotates one column holding one of its mice by a row,
//!   up or down; the whole column wraps, cheese included.
//! - **Settle**: mice fall while the cell below is free, otherwise walk toward
//!   their exit (team A left, team B right) while the cell ahead is free.
//! - **Score**: a mouse on its exit column leaves the board and scores a point.
//! - **Anti-repetition**: the column the opponent just shifted is off limits, and so
//!   is a column the mover shifted on each of its last six turns, unless nothing
//!   else is left.
//! - **End**: the first team to 12 wins; once both reach 11 the match is drawn
//!   after 8 more moves.
//!
//! # Example
//!
//! ```
//! use mice_men_core::{Match, MatchConfig};
//! use mice_men_core::types::Direction;
//!
//! let mut game = Match::new(MatchConfig::default(), 12345).unwrap();
//! let team = game.current_team();
//! let column = game.eligible_columns(team)[0];
//!
//! let result = game.commit_move(team, column, Direction::Up).unwrap();
//! assert_eq!(result.team, team);
//! assert_eq!(game.current_team(), team.opponent());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod match_state;
pub mod rng;
pub mod scoring;
pub mod settle;
pub mod shift;
pub mod snapshot;

pub use mice_men_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{BoardConfig, MatchConfig};
pub use error::{MoveError, SetupError};
pub use generator::generate_board;
pub use history::TeamHistory;
pub use match_state::{CellDelta, Match, MatchOutcome, MatchState, MoveEvent, MoveResult, Phase};
pub use rng::GameRng;
pub use scoring::{collect_exits, GoalExit, Scores};
pub use settle::{settle_fully, try_advance_one, SettleStep, StepKind};
pub use shift::shift_column;
pub use snapshot::{board_hash, MatchSnapshot};
