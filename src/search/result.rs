//! Search result types and statistics

use crate::instance::Element;
use crate::search::config::Heuristic;
use std::time::Duration;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A hitting set of size at most k, in the order it was committed
    Found(Vec<Element>),
    /// The search tree was exhausted: no hitting set of size at most k
    NoSolution,
    /// The caller's wall-clock budget ran out before the tree was exhausted
    TimedOut,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    /// The budget k the search ran with
    pub budget: u32,
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&[Element]> {
        match &self.outcome {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn timed_out(&self) -> bool {
        matches!(self.outcome, SearchOutcome::TimedOut)
    }

    /// Solution elements sorted ascending, for reporting
    pub fn sorted_solution(&self) -> Option<Vec<Element>> {
        self.solution().map(|s| {
            let mut sorted = s.to_vec();
            sorted.sort_unstable();
            sorted
        })
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Heuristic used for the search
    pub heuristic: Heuristic,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Search-tree nodes entered, including leaves
    pub nodes_visited: u64,
    /// Nodes that asked the selector for a branch decision
    pub branch_nodes: u64,
    /// Residual instances built
    pub reductions: u64,
    /// Child subtrees that failed and were abandoned
    pub backtracks: u64,
    /// Candidate ids skipped because they were already tried at the same node
    pub duplicates_skipped: u64,
    /// Deepest level reached (root = 0)
    pub max_depth: u32,
}

impl SearchStatistics {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Default::default()
        }
    }

    /// Mean number of children explored per branching node
    pub fn average_branching(&self) -> f64 {
        if self.branch_nodes == 0 {
            0.0
        } else {
            self.reductions as f64 / self.branch_nodes as f64
        }
    }

    /// Merge statistics from another run into this one
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.elapsed_time += other.elapsed_time;
        self.nodes_visited += other.nodes_visited;
        self.branch_nodes += other.branch_nodes;
        self.reductions += other.reductions;
        self.backtracks += other.backtracks;
        self.duplicates_skipped += other.duplicates_skipped;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}
