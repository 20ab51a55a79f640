//! Critical-element branching
//!
//! The critical element of an instance is the one contained in the most
//! subsets (smallest id on ties). Hitting it removes the most subsets at once.

use crate::frequency::FrequencyIndex;
use crate::instance::Instance;
use crate::search::config::Heuristic;
use crate::search::heuristic::{BranchDecision, BranchSelector};
use log::trace;
use rand::Rng;

/// Branch on a random subset, trying its most frequent elements first
pub struct CriticalSelector<R> {
    rng: R,
}

impl<R: Rng> CriticalSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BranchSelector for CriticalSelector<R> {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        if instance.is_solved() {
            return None;
        }

        let index = self.rng.random_range(0..instance.subset_count());
        let frequencies = FrequencyIndex::build(instance);
        let candidates = frequencies.order_by_frequency(instance.subsets()[index].elements());

        Some(BranchDecision::on_subset(index, candidates))
    }

    fn heuristic(&self) -> Heuristic {
        Heuristic::Critical
    }
}

/// Legacy rule: commit to the critical element alone.
///
/// Every node has a single child, so when the critical element is not part of
/// any hitting set within budget the search fails even though one exists.
pub struct GreedyCriticalSelector;

impl BranchSelector for GreedyCriticalSelector {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        let critical = FrequencyIndex::build(instance).critical_element()?;
        trace!("greedy: committing to critical element {}", critical);

        Some(BranchDecision {
            subset_index: None,
            candidates: vec![critical],
        })
    }

    fn heuristic(&self) -> Heuristic {
        Heuristic::GreedyCritical
    }
}
