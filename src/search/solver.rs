//! Bounded search-tree solver
//!
//! Depth-first branch-and-reduce over a [`BranchSelector`]:
//! 1. No subsets left: the empty sequence already hits everything
//! 2. Budget exhausted with subsets left: fail
//! 3. Otherwise take the selector's branch decision and, for each candidate
//!    element in order, recurse on the reduced instance with budget k-1.
//!    The first child that succeeds wins and the element is prepended to its
//!    solution; if every child fails, so does the node.
//!
//! Recursion depth is bounded by the initial budget.

use crate::instance::{Element, Instance};
use crate::reduction::reduce;
use crate::search::config::SearchConfig;
use crate::search::heuristic::BranchSelector;
use crate::search::result::{SearchOutcome, SearchResult, SearchStatistics};
use log::{debug, trace};
use std::time::Instant;

/// Outcome of one subtree
enum Step {
    Found(Vec<Element>),
    Failed,
    Interrupted,
}

/// Search-tree driver, generic over the branching heuristic
pub struct Solver<S> {
    selector: S,
    statistics: SearchStatistics,
    deadline: Option<Instant>,
}

impl<S: BranchSelector> Solver<S> {
    pub fn new(selector: S) -> Self {
        let statistics = SearchStatistics::new(selector.heuristic());
        Self {
            selector,
            statistics,
            deadline: None,
        }
    }

    /// Find at most `k` distinct elements hitting every subset of `instance`.
    ///
    /// Returns `None` when no such set exists in the explored tree.
    pub fn solve(&mut self, instance: &Instance, k: u32) -> Option<Vec<Element>> {
        self.reset();
        self.deadline = None;
        let start_time = Instant::now();

        let solution = match self.branch(instance, k, 0) {
            Step::Found(solution) => Some(solution),
            Step::Failed | Step::Interrupted => None,
        };

        self.statistics.elapsed_time = start_time.elapsed();
        solution
    }

    /// Run a search with the budget and wall-clock limit from `config`
    pub fn search(&mut self, instance: &Instance, config: &SearchConfig) -> SearchResult {
        self.reset();
        let start_time = Instant::now();
        let budget = config.budget.unwrap_or_else(|| instance.budget());
        self.deadline = config.timeout.map(|timeout| start_time + timeout);

        debug!(
            "search: heuristic={} n={} m={} k={}",
            self.selector.heuristic(),
            instance.universe_size(),
            instance.subset_count(),
            budget
        );

        let outcome = match self.branch(instance, budget, 0) {
            Step::Found(solution) => SearchOutcome::Found(solution),
            Step::Failed => SearchOutcome::NoSolution,
            Step::Interrupted => SearchOutcome::TimedOut,
        };

        self.deadline = None;
        self.statistics.elapsed_time = start_time.elapsed();

        debug!(
            "search: {:?} after {} nodes in {:?}",
            outcome, self.statistics.nodes_visited, self.statistics.elapsed_time
        );

        SearchResult {
            outcome,
            budget,
            statistics: self.statistics.clone(),
        }
    }

    /// Statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Reset the statistics for a new search
    pub fn reset(&mut self) {
        self.statistics = SearchStatistics::new(self.selector.heuristic());
    }

    fn branch(&mut self, instance: &Instance, k: u32, depth: u32) -> Step {
        self.statistics.nodes_visited += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);

        if instance.is_solved() {
            return Step::Found(Vec::new());
        }
        if k == 0 {
            return Step::Failed;
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Step::Interrupted;
        }

        let Some(decision) = self.selector.select(instance) else {
            return Step::Failed;
        };
        self.statistics.branch_nodes += 1;

        trace!(
            "depth {}: k={} m={} branching on {:?} -> {:?}",
            depth,
            k,
            instance.subset_count(),
            decision.subset_index,
            decision.candidates
        );

        let mut tried: Vec<Element> = Vec::with_capacity(decision.candidates.len());
        for &element in &decision.candidates {
            if tried.contains(&element) {
                self.statistics.duplicates_skipped += 1;
                continue;
            }
            tried.push(element);

            let residual = reduce(instance, element);
            self.statistics.reductions += 1;

            match self.branch(&residual, k - 1, depth + 1) {
                Step::Found(mut solution) => {
                    solution.insert(0, element);
                    return Step::Found(solution);
                }
                Step::Failed => {
                    self.statistics.backtracks += 1;
                    trace!("depth {}: backtrack from {}", depth, element);
                }
                Step::Interrupted => return Step::Interrupted,
            }
        }

        Step::Failed
    }
}
