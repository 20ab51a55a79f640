//! Problem instances for k-Hitting-Set

pub mod types;

// Re-export commonly used types
pub use types::{Element, Instance, InstanceError, Subset};
