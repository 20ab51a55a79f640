//! Bounded search-tree solving for k-Hitting-Set
//!
//! This module provides:
//! - Solver: the recursive branch/reduce/backtrack driver
//! - Heuristics: pluggable branch selectors deciding where the tree splits
//! - Config and result types shared by the CLI and the bench harness

pub mod config;
pub mod heuristic;
pub mod result;
pub mod solver;

pub use config::{Heuristic, SearchConfig};
pub use heuristic::{BranchDecision, BranchSelector, selector_for};
pub use result::{SearchOutcome, SearchResult, SearchStatistics};
pub use solver::Solver;

use crate::instance::Instance;

/// Run a search with the heuristic and seed named in `config`
pub fn run_search(instance: &Instance, config: &SearchConfig) -> SearchResult {
    let selector = selector_for(config.heuristic, config.seed);
    Solver::new(selector).search(instance, config)
}
