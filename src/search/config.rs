//! Configuration types for the search-tree solver

use std::time::Duration;

/// Branching heuristic selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Uniformly random subset, elements in random order
    Random,
    /// Random subset, elements by descending frequency
    Critical,
    /// Smallest subset, elements in stored order
    Smallest,
    /// Smallest subset, elements by descending frequency
    #[default]
    SmallestCritical,
    /// Legacy single-branch form of the critical-element rule.
    ///
    /// Commits to the most frequent element without trying alternatives, so
    /// it can miss hitting sets that exist. Only selectable explicitly.
    GreedyCritical,
}

impl Heuristic {
    /// The four exhaustive heuristics, in variant order
    pub const EXHAUSTIVE: [Heuristic; 4] = [
        Heuristic::Random,
        Heuristic::Critical,
        Heuristic::Smallest,
        Heuristic::SmallestCritical,
    ];

    /// Whether branching covers a complete case split at every node
    pub fn is_exhaustive(&self) -> bool {
        !matches!(self, Heuristic::GreedyCritical)
    }

    /// Whether the heuristic draws from the random source
    pub fn is_randomized(&self) -> bool {
        matches!(self, Heuristic::Random | Heuristic::Critical)
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Random => write!(f, "random"),
            Heuristic::Critical => write!(f, "critical"),
            Heuristic::Smallest => write!(f, "smallest"),
            Heuristic::SmallestCritical => write!(f, "smallest-critical"),
            Heuristic::GreedyCritical => write!(f, "greedy-critical"),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "random" | "rand" | "1" => Ok(Heuristic::Random),
            "critical" | "crit" | "2" => Ok(Heuristic::Critical),
            "smallest" | "small" | "3" => Ok(Heuristic::Smallest),
            "smallest-critical" | "small-crit" | "4" => Ok(Heuristic::SmallestCritical),
            "greedy-critical" | "greedy" => Ok(Heuristic::GreedyCritical),
            _ => Err(format!(
                "Unknown heuristic: '{}'. Valid options: random, critical, smallest, smallest-critical, greedy-critical",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Branching heuristic
    pub heuristic: Heuristic,
    /// Seed for the random source (None = seed from the OS)
    pub seed: Option<u64>,
    /// Wall-clock budget for the whole search (None = unbounded)
    pub timeout: Option<Duration>,
    /// Overrides the instance's own budget k when set
    pub budget: Option<u32>,
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_budget_option(mut self, budget: Option<u32>) -> Self {
        self.budget = budget;
        self
    }
}
