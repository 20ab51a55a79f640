//! Post-hoc certification of candidate hitting sets
//!
//! The solver never calls into this module; callers use it to check what the
//! solver returned.

pub mod certificate;

pub use certificate::{SolutionCheck, check_solution, is_hitting_set, unhit_subsets};
