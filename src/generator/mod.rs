//! Synthetic instances with a planted hitting set
//!
//! Every generated subset contains at least one planted element, so the
//! planted set is always a valid hitting set and the instance is solvable
//! with budget `planted_size`. The remaining slots are filled with distinct
//! non-planted elements.
//!
//! Hard instances add decoys: a few non-planted elements that take a filler
//! slot with probability `decoy_probability`. They end up more frequent than
//! any planted element, so frequency-first branching commits to them first
//! and has to backtrack.

use crate::instance::{Element, Instance, InstanceError, Subset};
use crate::search::heuristic::make_rng;
use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index::sample;
use thiserror::Error;

/// Generator parameters that cannot produce an instance
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("planted set size {planted} must be in [1, {universe_size}]")]
    PlantedSize { planted: u32, universe_size: u32 },

    #[error("subset size range [{min}, {max}] is empty or starts at 0")]
    SubsetSizeRange { min: u32, max: u32 },

    #[error("max planted elements per subset must be at least 1")]
    NoPlantedPerSubset,

    #[error("subsets of size {max} need more non-planted elements than the {available} available")]
    NotEnoughFiller { max: u32, available: u32 },

    #[error("{decoys} decoys exceed the {available} non-planted elements")]
    DecoyCount { decoys: u32, available: u32 },

    #[error("decoy probability {0} must be in [0, 1]")]
    DecoyProbability(f64),

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Configuration for instance generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Universe size n
    pub universe_size: u32,
    /// Number of subsets m
    pub subset_count: u32,
    /// Smallest subset size
    pub min_subset_size: u32,
    /// Largest subset size c
    pub max_subset_size: u32,
    /// Size of the planted hitting set
    pub planted_size: u32,
    /// Upper bound on planted elements per subset
    pub max_planted_per_subset: u32,
    /// Number of frequent non-planted elements
    pub decoys: u32,
    /// Chance that a filler slot takes a decoy
    pub decoy_probability: f64,
    /// Budget written into the instance (None = planted size)
    pub budget: Option<u32>,
    /// Seed for random number generator (None = random seed)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            universe_size: 100,
            subset_count: 1000,
            min_subset_size: 4,
            max_subset_size: 6,
            planted_size: 10,
            max_planted_per_subset: 2,
            decoys: 0,
            decoy_probability: 0.4,
            budget: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_universe_size(mut self, n: u32) -> Self {
        self.universe_size = n;
        self
    }

    pub fn with_subset_count(mut self, m: u32) -> Self {
        self.subset_count = m;
        self
    }

    pub fn with_subset_size(mut self, min: u32, max: u32) -> Self {
        self.min_subset_size = min;
        self.max_subset_size = max;
        self
    }

    pub fn with_planted_size(mut self, k: u32) -> Self {
        self.planted_size = k;
        self
    }

    pub fn with_max_planted_per_subset(mut self, count: u32) -> Self {
        self.max_planted_per_subset = count;
        self
    }

    pub fn with_decoys(mut self, decoys: u32, probability: f64) -> Self {
        self.decoys = decoys;
        self.decoy_probability = probability;
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
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

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.planted_size == 0 || self.planted_size > self.universe_size {
            return Err(GeneratorError::PlantedSize {
                planted: self.planted_size,
                universe_size: self.universe_size,
            });
        }
        if self.min_subset_size == 0 || self.min_subset_size > self.max_subset_size {
            return Err(GeneratorError::SubsetSizeRange {
                min: self.min_subset_size,
                max: self.max_subset_size,
            });
        }
        if self.max_planted_per_subset == 0 {
            return Err(GeneratorError::NoPlantedPerSubset);
        }
        let available = self.universe_size - self.planted_size;
        let planted_slots = self.max_planted_per_subset.min(self.planted_size);
        if self.max_subset_size > available + planted_slots {
            return Err(GeneratorError::NotEnoughFiller {
                max: self.max_subset_size,
                available,
            });
        }
        if self.decoys > available {
            return Err(GeneratorError::DecoyCount {
                decoys: self.decoys,
                available,
            });
        }
        if !(0.0..=1.0).contains(&self.decoy_probability) {
            return Err(GeneratorError::DecoyProbability(self.decoy_probability));
        }
        Ok(())
    }
}

/// A generated instance and the hitting set planted in it
#[derive(Debug, Clone)]
pub struct GeneratedInstance {
    pub instance: Instance,
    /// Planted elements, ascending
    pub planted: Vec<Element>,
    /// Decoy elements, ascending
    pub decoys: Vec<Element>,
}

/// Generate an instance according to `config`
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedInstance, GeneratorError> {
    config.validate()?;
    let mut rng = make_rng(config.seed);

    let universe: Vec<Element> = (1..=config.universe_size).collect();
    let mut planted: Vec<Element> = sample(
        &mut rng,
        universe.len(),
        config.planted_size as usize,
    )
    .into_iter()
    .map(|i| universe[i])
    .collect();
    planted.sort_unstable();

    let filler: Vec<Element> = universe
        .iter()
        .copied()
        .filter(|e| planted.binary_search(e).is_err())
        .collect();

    let mut decoys: Vec<Element> = sample(&mut rng, filler.len(), config.decoys as usize)
        .into_iter()
        .map(|i| filler[i])
        .collect();
    decoys.sort_unstable();
    let plain: Vec<Element> = filler
        .iter()
        .copied()
        .filter(|e| decoys.binary_search(e).is_err())
        .collect();

    let mut subsets = Vec::with_capacity(config.subset_count as usize);
    for _ in 0..config.subset_count {
        let size = rng.random_range(config.min_subset_size..=config.max_subset_size) as usize;

        let most_planted = (config.max_planted_per_subset as usize)
            .min(planted.len())
            .min(size);
        let least_planted = size.saturating_sub(filler.len()).max(1);
        let planted_count = rng.random_range(least_planted..=most_planted);
        let rest = size - planted_count;

        // rest <= decoys + plain, so the floor never exceeds the decoy pool
        let drawn = if decoys.is_empty() {
            0
        } else {
            (0..rest)
                .filter(|_| rng.random_bool(config.decoy_probability))
                .count()
        };
        let decoy_count = drawn
            .min(decoys.len())
            .max(rest.saturating_sub(plain.len()));

        let mut elements: Vec<Element> = sample(&mut rng, planted.len(), planted_count)
            .into_iter()
            .map(|i| planted[i])
            .collect();
        elements.extend(
            sample(&mut rng, decoys.len(), decoy_count)
                .into_iter()
                .map(|i| decoys[i]),
        );
        elements.extend(
            sample(&mut rng, plain.len(), rest - decoy_count)
                .into_iter()
                .map(|i| plain[i]),
        );
        elements.shuffle(&mut rng);

        subsets.push(Subset::new(elements));
    }

    let budget = config.budget.unwrap_or(config.planted_size);
    let instance = Instance::new(config.universe_size, subsets, budget)?;

    Ok(GeneratedInstance {
        instance,
        planted,
        decoys,
    })
}
