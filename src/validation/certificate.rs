//! Hitting-set checks against an instance

use crate::instance::{Element, Instance};
use std::collections::HashSet;
use std::fmt;

/// True iff every subset of `instance` shares an element with `candidate`
pub fn is_hitting_set(candidate: &[Element], instance: &Instance) -> bool {
    instance
        .subsets()
        .iter()
        .all(|subset| subset.is_hit_by(candidate))
}

/// Indices of the subsets `candidate` misses
pub fn unhit_subsets(candidate: &[Element], instance: &Instance) -> Vec<usize> {
    instance
        .subsets()
        .iter()
        .enumerate()
        .filter(|(_, subset)| !subset.is_hit_by(candidate))
        .map(|(index, _)| index)
        .collect()
}

/// Full verdict on a candidate solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionCheck {
    /// Ids that occur more than once in the candidate
    pub duplicates: Vec<Element>,
    /// Ids outside `[1, n]`
    pub out_of_universe: Vec<Element>,
    /// Candidate length when it exceeds the budget
    pub over_budget: Option<usize>,
    /// Subsets the candidate does not hit
    pub unhit: Vec<usize>,
}

impl SolutionCheck {
    pub fn is_valid(&self) -> bool {
        self.duplicates.is_empty()
            && self.out_of_universe.is_empty()
            && self.over_budget.is_none()
            && self.unhit.is_empty()
    }
}

impl fmt::Display for SolutionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid hitting set");
        }
        let mut problems = Vec::new();
        if !self.duplicates.is_empty() {
            problems.push(format!("duplicate elements {:?}", self.duplicates));
        }
        if !self.out_of_universe.is_empty() {
            problems.push(format!("elements outside universe {:?}", self.out_of_universe));
        }
        if let Some(len) = self.over_budget {
            problems.push(format!("size {} exceeds budget", len));
        }
        if !self.unhit.is_empty() {
            problems.push(format!("{} subsets not hit", self.unhit.len()));
        }
        write!(f, "invalid: {}", problems.join("; "))
    }
}

/// Check `candidate` against `instance` with budget `k`
pub fn check_solution(candidate: &[Element], instance: &Instance, k: u32) -> SolutionCheck {
    let mut seen = HashSet::with_capacity(candidate.len());
    let mut duplicates = Vec::new();
    for &e in candidate {
        if !seen.insert(e) && !duplicates.contains(&e) {
            duplicates.push(e);
        }
    }

    let out_of_universe = candidate
        .iter()
        .copied()
        .filter(|&e| e == 0 || e > instance.universe_size())
        .collect();

    let over_budget = (candidate.len() > k as usize).then_some(candidate.len());

    SolutionCheck {
        duplicates,
        out_of_universe,
        over_budget,
        unhit: unhit_subsets(candidate, instance),
    }
}
