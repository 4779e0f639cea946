//! Match configuration.
//!
//! The reference game is a 19x13 board with 12 mice per team, a win at 12
//! points and an 8-move draw countdown once both teams reach 11. Every value is
//! exposed here so variants can be set up without touching the rules code.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::types::{
    Team, BOARD_HEIGHT, BOARD_WIDTH, DRAW_COUNTDOWN, DRAW_THRESHOLD, PIECES_PER_TEAM,
    WINNING_SCORE,
};

/// Board geometry and population.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Mice placed per team.
    pub pieces_per_team: u32,
}

impl BoardConfig {
    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of mice per team.
    #[must_use]
    pub fn with_pieces_per_team(mut self, pieces: u32) -> Self {
        self.pieces_per_team = pieces;
        self
    }

    /// Check the geometry can hold two home zones.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.width < 4 || self.height < 1 || self.width > i32::MAX as usize {
            return Err(SetupError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Columns (inclusive range) a team's mice are spawned in.
    ///
    /// Each team starts on the side opposite its exit: team B walks right and
    /// spawns on the left half, team A walks left and spawns on the mirrored
    /// right half. The middle column of an odd-width board belongs to neither.
    pub fn home_columns(&self, team: Team) -> (usize, usize) {
        let half = self.width / 2;
        match team {
            Team::B => (0, half - 1),
            Team::A => (self.width - half, self.width - 1),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            pieces_per_team: PIECES_PER_TEAM,
        }
    }
}

/// Rules for a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub board: BoardConfig,

    /// Score that wins the match.
    pub winning_score: u32,

    /// Both scores at or above this activate the draw countdown.
    pub draw_threshold: u32,

    /// Committed moves between countdown activation and the draw.
    pub draw_countdown: u32,

    /// Team that moves first. `None` draws it from the match seed.
    pub first_team: Option<Team>,
}

impl MatchConfig {
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the draw threshold and countdown length together.
    #[must_use]
    pub fn with_draw_rule(mut self, threshold: u32, countdown: u32) -> Self {
        self.draw_threshold = threshold;
        self.draw_countdown = countdown;
        self
    }

    #[must_use]
    pub fn with_first_team(mut self, team: Team) -> Self {
        self.first_team = Some(team);
        self
    }

    /// Validate geometry and rule constants.
    pub fn validate(&self) -> Result<(), SetupError> {
        self.board.validate()?;
        if self.winning_score == 0 {
            return Err(SetupError::InvalidRules("winning score must be positive"));
        }
        if self.winning_score > self.board.pieces_per_team {
            return Err(SetupError::InvalidRules(
                "winning score exceeds the number of pieces per team",
            ));
        }
        if self.draw_threshold > self.winning_score {
            return Err(SetupError::InvalidRules(
                "draw threshold exceeds the winning score",
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            winning_score: WINNING_SCORE,
            draw_threshold: DRAW_THRESHOLD,
            draw_countdown: DRAW_COUNTDOWN,
            first_team: None,
        }
    }
}
