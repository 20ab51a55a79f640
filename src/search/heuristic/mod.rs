//! Branching heuristics for the search-tree solver
//!
//! At every node the solver asks a [`BranchSelector`] which subset to branch
//! on and in what order to try its elements. Any valid hitting set contains
//! an element of every subset, so trying all elements of one subset is a
//! complete case split whatever the order. The heuristics only change the
//! shape of the tree:
//! - [`RandomSelector`]: random subset, random element order
//! - [`CriticalSelector`]: random subset, most frequent elements first
//! - [`SmallestSelector`]: smallest subset, stored element order
//! - [`SmallestCriticalSelector`]: smallest subset, most frequent elements first
//!
//! [`GreedyCriticalSelector`] is the legacy single-candidate rule and does not
//! produce a complete case split.

pub mod critical;
pub mod random;
pub mod smallest;

pub use critical::{CriticalSelector, GreedyCriticalSelector};
pub use random::RandomSelector;
pub use smallest::{SmallestCriticalSelector, SmallestSelector};

use crate::instance::{Element, Instance};
use crate::search::config::Heuristic;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The branch point chosen at one search-tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDecision {
    /// Index of the subset being branched on, `None` for non-subset branching
    pub subset_index: Option<usize>,
    /// Elements to try, in order. May repeat an id if the subset does.
    pub candidates: Vec<Element>,
}

impl BranchDecision {
    pub fn on_subset(subset_index: usize, candidates: Vec<Element>) -> Self {
        Self {
            subset_index: Some(subset_index),
            candidates,
        }
    }
}

/// Strategy for choosing where the search tree branches
pub trait BranchSelector {
    /// Pick the branch point for `instance`.
    ///
    /// Returns `None` only when the instance has no subsets left.
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision>;

    /// The heuristic this selector implements
    fn heuristic(&self) -> Heuristic;
}

impl<S: BranchSelector + ?Sized> BranchSelector for Box<S> {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        (**self).select(instance)
    }

    fn heuristic(&self) -> Heuristic {
        (**self).heuristic()
    }
}

/// Seeded ChaCha stream, or one seeded from the OS when `seed` is `None`
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Build the selector for `heuristic`, drawing randomness from `seed`
pub fn selector_for(heuristic: Heuristic, seed: Option<u64>) -> Box<dyn BranchSelector> {
    match heuristic {
        Heuristic::Random => Box::new(RandomSelector::new(make_rng(seed))),
        Heuristic::Critical => Box::new(CriticalSelector::new(make_rng(seed))),
        Heuristic::Smallest => Box::new(SmallestSelector),
        Heuristic::SmallestCritical => Box::new(SmallestCriticalSelector),
        Heuristic::GreedyCritical => Box::new(GreedyCriticalSelector),
    }
}
