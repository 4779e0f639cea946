//! Move planning for automated players.
//!
//! The core only validates and applies moves; this crate decides which move to
//! make. It drives headless matches and gives a presentation layer a computer
//! opponent. Every decision draws from a caller-owned [`GameRng`], so a seeded
//! match replays identically.

pub mod plan;

pub use mice_men_core as core;
pub use mice_men_types as types;

pub use mice_men_core::GameRng;
pub use plan::{choose_move, PlanError, PlannedMove, Policy};
