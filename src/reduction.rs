//! Instance reduction after committing an element to the hitting set

use crate::instance::{Element, Instance};

/// Remove every subset that contains `element`.
///
/// The remaining subsets are copied over unchanged and in their original
/// order; universe size and budget are carried over as-is. The input is
/// never modified, so sibling branches of the search tree can each reduce
/// the same parent independently.
pub fn reduce(instance: &Instance, element: Element) -> Instance {
    let remaining = instance
        .subsets()
        .iter()
        .filter(|subset| !subset.contains(element))
        .cloned()
        .collect();

    Instance::from_parts_unchecked(instance.universe_size(), remaining, instance.budget())
}
