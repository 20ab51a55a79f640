//! Core types for hitting-set instances

use std::fmt;
use thiserror::Error;

/// A universe element, 1-indexed in `[1, n]`
pub type Element = u32;

/// Errors raised when an instance would violate its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The universe must contain at least one element
    #[error("universe size must be at least 1")]
    EmptyUniverse,

    /// Subsets must contain at least one element
    #[error("subset {index} is empty")]
    EmptySubset { index: usize },

    /// An element lies outside `[1, n]`
    #[error("subset {index} contains element {element} outside universe [1, {universe_size}]")]
    ElementOutOfRange {
        index: usize,
        element: Element,
        universe_size: u32,
    },
}

/// A variable-length subset of the universe
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    elements: Vec<Element>,
}

impl Subset {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of stored elements (repeated ids count each time)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Check whether any element of `candidate` lies in this subset
    pub fn is_hit_by(&self, candidate: &[Element]) -> bool {
        candidate.iter().any(|&e| self.contains(e))
    }
}

impl From<Vec<Element>> for Subset {
    fn from(elements: Vec<Element>) -> Self {
        Self::new(elements)
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}}")
    }
}

/// A k-Hitting-Set instance: universe `[1, n]`, subsets over it, and a budget `k`
///
/// Instances are immutable once built. Search derives new instances through
/// [`crate::reduction::reduce`] instead of editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    universe_size: u32,
    subsets: Vec<Subset>,
    budget: u32,
}

impl Instance {
    /// Build an instance, checking that the universe is non-empty, every
    /// subset is non-empty, and every element lies in `[1, universe_size]`.
    pub fn new(
        universe_size: u32,
        subsets: Vec<Subset>,
        budget: u32,
    ) -> Result<Self, InstanceError> {
        if universe_size == 0 {
            return Err(InstanceError::EmptyUniverse);
        }

        for (index, subset) in subsets.iter().enumerate() {
            if subset.is_empty() {
                return Err(InstanceError::EmptySubset { index });
            }
            if let Some(&element) = subset
                .elements()
                .iter()
                .find(|&&e| e == 0 || e > universe_size)
            {
                return Err(InstanceError::ElementOutOfRange {
                    index,
                    element,
                    universe_size,
                });
            }
        }

        Ok(Self {
            universe_size,
            subsets,
            budget,
        })
    }

    /// Convenience constructor from nested element lists
    pub fn from_lists(
        universe_size: u32,
        lists: Vec<Vec<Element>>,
        budget: u32,
    ) -> Result<Self, InstanceError> {
        Self::new(
            universe_size,
            lists.into_iter().map(Subset::new).collect(),
            budget,
        )
    }

    /// Build an instance from parts already known to satisfy the invariants
    pub(crate) fn from_parts_unchecked(
        universe_size: u32,
        subsets: Vec<Subset>,
        budget: u32,
    ) -> Self {
        debug_assert!(universe_size >= 1);
        debug_assert!(subsets.iter().all(|s| !s.is_empty()));
        Self {
            universe_size,
            subsets,
            budget,
        }
    }

    pub fn universe_size(&self) -> u32 {
        self.universe_size
    }

    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }

    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Longest stored subset, 0 when there are no subsets
    pub fn max_subset_size(&self) -> usize {
        self.subsets.iter().map(Subset::len).max().unwrap_or(0)
    }

    /// True once every subset has been hit
    pub fn is_solved(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Same subsets, different budget
    pub fn with_budget(&self, budget: u32) -> Self {
        Self {
            universe_size: self.universe_size,
            subsets: self.subsets.clone(),
            budget,
        }
    }

    /// Iterate over every element id in the universe
    pub fn universe(&self) -> impl Iterator<Item = Element> {
        1..=self.universe_size
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "n:{} m:{} c:{} k:{}",
            self.universe_size,
            self.subset_count(),
            self.max_subset_size(),
            self.budget
        )?;
        for (i, subset) in self.subsets.iter().enumerate() {
            writeln!(f, "B[{}] = {}", i, subset)?;
        }
        Ok(())
    }
}
