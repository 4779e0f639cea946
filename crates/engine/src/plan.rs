use thiserror::Error;

use crate::core::{GameRng, Match};
use crate::types::{Direction, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("match is over")]
    MatchOver,
    #[error("{0} has no eligible column")]
    NoEligibleColumn(Team),
}

/// How an automated player picks its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Uniform over eligible columns and both directions
    Random,
    /// Best immediate score margin, ties broken at random
    Greedy,
}

impl Policy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "random" => Some(Policy::Random),
            "greedy" => Some(Policy::Greedy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Random => "random",
            Policy::Greedy => "greedy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlannedMove {
    pub team: Team,
    pub column: usize,
    pub direction: Direction,
}

/// Pick a move for the team whose turn it is
pub fn choose_move(
    game: &Match,
    policy: Policy,
    rng: &mut GameRng,
) -> Result<PlannedMove, PlanError> {
    if game.is_finished() {
        return Err(PlanError::MatchOver);
    }

    let team = game.current_team();
    let candidates: Vec<PlannedMove> = game
        .eligible_columns(team)
        .into_iter()
        .flat_map(|column| {
            Direction::ALL.into_iter().map(move |direction| PlannedMove {
                team,
                column,
                direction,
            })
        })
        .collect();

    let pool = match policy {
        Policy::Random => candidates,
        Policy::Greedy => best_by_margin(game, candidates),
    };

    let choice = rng
        .choose(&pool)
        .copied()
        .ok_or(PlanError::NoEligibleColumn(team))?;
    log::debug!(
        "{} ({}) picks column {} {}",
        team,
        policy.as_str(),
        choice.column,
        choice.direction.as_str()
    );
    Ok(choice)
}

/// Candidates sharing the highest score margin after a simulated move
fn best_by_margin(game: &Match, candidates: Vec<PlannedMove>) -> Vec<PlannedMove> {
    let mut best = Vec::new();
    let mut best_margin = i64::MIN;

    for candidate in candidates {
        let mut trial = game.clone();
        let Ok(result) = trial.commit_move(candidate.team, candidate.column, candidate.direction)
        else {
            continue;
        };

        let margin = result.scores.margin(candidate.team);
        if margin > best_margin {
            best_margin = margin;
            best.clear();
        }
        if margin == best_margin {
            best.push(candidate);
        }
    }
    best
}
