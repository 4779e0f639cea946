use serde::{Deserialize, Serialize};

use crate::match_state::Phase;
use crate::rng::fnv1a64;
use crate::scoring::Scores;
use crate::types::Team;
use crate::Board;

/// Serializable view of a match, refreshed in place via [`crate::Match::snapshot_into`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub width: usize,
    pub height: usize,
    /// ASCII rows, top row first
    pub board: Vec<String>,
    pub board_hash: u64,
    pub seed: u64,
    pub turn: u32,
    pub current_team: Team,
    pub phase: Phase,
    pub scores: Scores,
    pub history_a: Vec<usize>,
    pub history_b: Vec<usize>,
    /// Moves left before a draw, once the countdown is running
    pub draw_countdown: Option<u32>,
}

impl MatchSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.board.clear();
        self.board_hash = 0;
        self.seed = 0;
        self.turn = 0;
        self.current_team = Team::A;
        self.phase = Phase::AwaitingSelection(Team::A);
        self.scores = Scores::default();
        self.history_a.clear();
        self.history_b.clear();
        self.draw_countdown = None;
    }

    pub fn playable(&self) -> bool {
        matches!(self.phase, Phase::AwaitingSelection(_))
    }
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            board_hash: 0,
            seed: 0,
            turn: 0,
            current_team: Team::A,
            phase: Phase::AwaitingSelection(Team::A),
            scores: Scores::default(),
            history_a: Vec::new(),
            history_b: Vec::new(),
            draw_countdown: None,
        }
    }
}

/// FNV-1a 64-bit hash over the cell codes, row-major from the bottom row
pub fn board_hash(board: &Board) -> u64 {
    fnv1a64(
        board
            .cells()
            .iter()
            .map(|cell| cell.map_or(0, |occupant| occupant.code())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_tracks_contents() {
        let a = Board::from_ascii(&["a..", "#.b"]).unwrap();
        let b = Board::from_ascii(&["a..", "#.b"]).unwrap();
        let c = Board::from_ascii(&["b..", "#.a"]).unwrap();
        assert_eq!(board_hash(&a), board_hash(&b));
        assert_ne!(board_hash(&a), board_hash(&c));
    }

    #[test]
    fn test_clear_resets_to_default() {
        let mut snap = MatchSnapshot {
            turn: 9,
            board: vec!["a".to_string()],
            draw_countdown: Some(3),
            ..MatchSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, MatchSnapshot::default());
    }
}
