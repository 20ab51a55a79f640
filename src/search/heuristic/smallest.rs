//! Smallest-subset branching
//!
//! Branching on the subset with the fewest elements keeps the number of
//! children per node as low as possible.

use crate::frequency::FrequencyIndex;
use crate::instance::Instance;
use crate::search::config::Heuristic;
use crate::search::heuristic::{BranchDecision, BranchSelector};

/// Index of the first subset with the fewest stored elements
pub fn smallest_subset_index(instance: &Instance) -> Option<usize> {
    instance
        .subsets()
        .iter()
        .enumerate()
        .min_by_key(|(index, subset)| (subset.len(), *index))
        .map(|(index, _)| index)
}

/// Branch on the smallest subset, trying elements in stored order
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestSelector;

impl BranchSelector for SmallestSelector {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        let index = smallest_subset_index(instance)?;
        let candidates = instance.subsets()[index].elements().to_vec();
        Some(BranchDecision::on_subset(index, candidates))
    }

    fn heuristic(&self) -> Heuristic {
        Heuristic::Smallest
    }
}

/// Branch on the smallest subset, trying its most frequent elements first
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestCriticalSelector;

impl BranchSelector for SmallestCriticalSelector {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        let index = smallest_subset_index(instance)?;
        let frequencies = FrequencyIndex::build(instance);
        let candidates = frequencies.order_by_frequency(instance.subsets()[index].elements());
        Some(BranchDecision::on_subset(index, candidates))
    }

    fn heuristic(&self) -> Heuristic {
        Heuristic::SmallestCritical
    }
}
