//! Per-team move history used by the anti-repetition rules

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::HISTORY_LEN;

/// The last [`HISTORY_LEN`] columns a team shifted, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamHistory {
    columns: ArrayVec<usize, HISTORY_LEN>,
}

impl TeamHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, evicting the oldest entry when full
    pub fn push(&mut self, column: usize) {
        if self.columns.is_full() {
            self.columns.remove(0);
        }
        self.columns.push(column);
    }

    /// Most recent selection
    pub fn last(&self) -> Option<usize> {
        self.columns.last().copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns
    }

    /// How many remembered selections equal `column`
    pub fn count(&self, column: usize) -> usize {
        self.columns.iter().filter(|&&c| c == column).count()
    }

    /// `true` when every remembered slot holds `column` and the history is full
    pub fn saturated_by(&self, column: usize) -> bool {
        self.count(column) == HISTORY_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = TeamHistory::new();
        for column in 0..8 {
            history.push(column);
            assert!(history.len() <= HISTORY_LEN);
        }
        assert_eq!(history.as_slice(), &[2, 3, 4, 5, 6, 7]);
        assert_eq!(history.last(), Some(7));
    }

    #[test]
    fn test_saturation_needs_full_history() {
        let mut history = TeamHistory::new();
        for _ in 0..5 {
            history.push(4);
        }
        assert!(!history.saturated_by(4));
        history.push(4);
        assert!(history.saturated_by(4));
        history.push(1);
        assert!(!history.saturated_by(4));
        assert_eq!(history.count(4), 5);
    }
}
