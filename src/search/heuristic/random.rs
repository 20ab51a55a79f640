//! Uniformly random branching

use crate::instance::Instance;
use crate::search::config::Heuristic;
use crate::search::heuristic::{BranchDecision, BranchSelector};
use rand::Rng;
use rand::seq::SliceRandom;

/// Branch on a uniformly random subset, trying its elements in a random order
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BranchSelector for RandomSelector<R> {
    fn select(&mut self, instance: &Instance) -> Option<BranchDecision> {
        if instance.is_solved() {
            return None;
        }

        let index = self.rng.random_range(0..instance.subset_count());
        let mut candidates = instance.subsets()[index].elements().to_vec();
        candidates.shuffle(&mut self.rng);

        Some(BranchDecision::on_subset(index, candidates))
    }

    fn heuristic(&self) -> Heuristic {
        Heuristic::Random
    }
}
