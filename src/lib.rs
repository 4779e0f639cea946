//! Mice Men (workspace facade crate).
//!
//! Re-exports the workspace crates under `mice_men::{core,engine,types}` and hosts
//! the headless runner's environment configuration.

pub mod runner;

pub use mice_men_core as core;
pub use mice_men_engine as engine;
pub use mice_men_types as types;
