//! Exact bounded search-tree solver for k-Hitting-Set
//!
//! Given a universe `[1, n]`, a collection of subsets and a budget `k`, find
//! at most `k` distinct elements that intersect every subset, or prove that
//! none exist. The solver branches on the elements of one subset per node and
//! reduces the instance after each choice, so the tree has depth at most `k`
//! and branching factor at most the chosen subset's size.
//!
//! ```
//! use khs::instance::Instance;
//! use khs::search::{Heuristic, SearchConfig, run_search};
//! use khs::validation::is_hitting_set;
//!
//! let instance = Instance::from_lists(3, vec![vec![1, 2], vec![2, 3]], 1).unwrap();
//! let config = SearchConfig::default().with_heuristic(Heuristic::SmallestCritical);
//! let result = run_search(&instance, &config);
//!
//! assert_eq!(result.solution(), Some(&[2][..]));
//! assert!(is_hitting_set(result.solution().unwrap(), &instance));
//! ```
//!
//! Modules:
//! - [`instance`]: the problem data model
//! - [`reduction`]: residual instances after committing an element
//! - [`frequency`]: per-element subset counts
//! - [`search`]: solver, branching heuristics, config and results
//! - [`validation`]: post-hoc certification of solutions
//! - [`parser`]: flat-text instance format
//! - [`generator`]: planted synthetic instances
//! - [`bench`]: repetition harness and timing report

pub mod bench;
pub mod frequency;
pub mod generator;
pub mod instance;
pub mod parser;
pub mod reduction;
pub mod search;
pub mod validation;
