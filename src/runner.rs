//! Headless match runner.
//!
//! Plays one seeded match between two automated players. Settings come from
//! environment variables:
//!
//! - `MICEMEN_SEED`: match seed (default 1)
//! - `MICEMEN_WIDTH` / `MICEMEN_HEIGHT`: board size (default 19x13)
//! - `MICEMEN_MAX_TURNS`: stop after this many committed moves (default 500)
//! - `MICEMEN_POLICY_A` / `MICEMEN_POLICY_B`: `random` or `greedy` (default greedy)
//! - `MICEMEN_JSON`: set to `1` or `true` to print the final snapshot as JSON

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::core::{BoardConfig, GameRng, Match, MatchConfig};
use crate::engine::{choose_move, Policy};
use crate::types::Team;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub seed: u64,
    pub match_config: MatchConfig,
    pub max_turns: u32,
    pub policies: [Policy; 2],
    pub json: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            match_config: MatchConfig::default(),
            max_turns: 500,
            policies: [Policy::Greedy, Policy::Greedy],
            json: false,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T> {
    match value.map(|s| s.trim().to_string()) {
        None => Ok(default),
        Some(s) if s.is_empty() => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| anyhow!("{}: invalid value: {}", name, s)),
    }
}

fn parse_policy(name: &str, value: Option<String>) -> Result<Policy> {
    match value.map(|s| s.trim().to_string()) {
        None => Ok(Policy::Greedy),
        Some(s) if s.is_empty() => Ok(Policy::Greedy),
        Some(s) => Policy::from_str(&s).ok_or_else(|| anyhow!("{}: unknown policy: {}", name, s)),
    }
}

impl RunnerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let board = BoardConfig::default();

        let seed = parse_var("MICEMEN_SEED", lookup("MICEMEN_SEED"), defaults.seed)?;
        let width = parse_var("MICEMEN_WIDTH", lookup("MICEMEN_WIDTH"), board.width)?;
        let height = parse_var("MICEMEN_HEIGHT", lookup("MICEMEN_HEIGHT"), board.height)?;
        let max_turns = parse_var(
            "MICEMEN_MAX_TURNS",
            lookup("MICEMEN_MAX_TURNS"),
            defaults.max_turns,
        )?;
        let policy_a = parse_policy("MICEMEN_POLICY_A", lookup("MICEMEN_POLICY_A"))?;
        let policy_b = parse_policy("MICEMEN_POLICY_B", lookup("MICEMEN_POLICY_B"))?;
        let json = lookup("MICEMEN_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let match_config = MatchConfig::default().with_board(board.with_size(width, height));
        match_config
            .validate()
            .context("invalid board configuration")?;

        Ok(Self {
            seed,
            match_config,
            max_turns,
            policies: [policy_a, policy_b],
            json,
        })
    }

    pub fn policy(&self, team: Team) -> Policy {
        self.policies[team.index()]
    }
}

/// Play a match to completion or until the turn limit
pub fn run_match(config: &RunnerConfig) -> Result<Match> {
    let mut game = Match::new(config.match_config, config.seed)
        .with_context(|| format!("failed to set up match with seed {}", config.seed))?;

    let root = GameRng::new(config.seed);
    let mut rngs = [root.for_context("policy-a"), root.for_context("policy-b")];

    while !game.is_finished() && game.state().turn < config.max_turns {
        let team = game.current_team();
        let planned = choose_move(&game, config.policy(team), &mut rngs[team.index()])?;
        game.commit_move(planned.team, planned.column, planned.direction)?;
    }

    if !game.is_finished() {
        log::warn!(
            "turn limit {} reached without a result, score {}-{}",
            config.max_turns,
            game.scores().get(Team::A),
            game.scores().get(Team::B)
        );
    }
    Ok(game)
}
