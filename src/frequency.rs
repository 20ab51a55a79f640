//! Per-element subset frequencies
//!
//! The frequency of an element is the number of distinct subsets that contain
//! it. A subset that lists the same id twice still counts once.

use crate::instance::{Element, Instance};

/// Frequency table over the universe `[1, n]` of one instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyIndex {
    // Slot 0 is unused so elements index directly
    counts: Vec<usize>,
}

impl FrequencyIndex {
    pub fn build(instance: &Instance) -> Self {
        let size = instance.universe_size() as usize + 1;
        let mut counts = vec![0usize; size];
        // Stamp of the last subset that bumped each element; dedups within a subset
        let mut last_seen = vec![usize::MAX; size];

        for (index, subset) in instance.subsets().iter().enumerate() {
            for &e in subset.elements() {
                let slot = e as usize;
                if last_seen[slot] != index {
                    last_seen[slot] = index;
                    counts[slot] += 1;
                }
            }
        }

        Self { counts }
    }

    /// Number of subsets containing `element` (0 for ids outside the universe)
    pub fn count(&self, element: Element) -> usize {
        match element {
            0 => 0,
            e => self.counts.get(e as usize).copied().unwrap_or(0),
        }
    }

    pub fn universe_size(&self) -> u32 {
        (self.counts.len() - 1) as u32
    }

    /// The element contained in the most subsets, smallest id on ties.
    /// `None` when no element occurs at all.
    pub fn critical_element(&self) -> Option<Element> {
        let mut best: Option<(Element, usize)> = None;
        for e in 1..self.counts.len() {
            let count = self.counts[e];
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((e as Element, count)),
            }
        }
        best.map(|(e, _)| e)
    }

    /// Sort elements by descending frequency, smallest id first on ties
    pub fn order_by_frequency(&self, elements: &[Element]) -> Vec<Element> {
        let mut ordered = elements.to_vec();
        ordered.sort_by(|&a, &b| self.count(b).cmp(&self.count(a)).then(a.cmp(&b)));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_counts() {
        let instance =
            Instance::from_lists(4, vec![vec![1, 2], vec![2, 3], vec![2, 4], vec![4]], 2).unwrap();
        let index = FrequencyIndex::build(&instance);
        assert_eq!(index.count(1), 1);
        assert_eq!(index.count(2), 3);
        assert_eq!(index.count(3), 1);
        assert_eq!(index.count(4), 2);
        assert_eq!(index.universe_size(), 4);
    }

    #[test]
    fn test_duplicates_within_subset_count_once() {
        let instance = Instance::from_lists(3, vec![vec![1, 1, 1], vec![1, 2]], 1).unwrap();
        let index = FrequencyIndex::build(&instance);
        assert_eq!(index.count(1), 2);
        assert_eq!(index.count(2), 1);
    }

    #[test]
    fn test_out_of_universe_counts_zero() {
        let instance = Instance::from_lists(2, vec![vec![1, 2]], 1).unwrap();
        let index = FrequencyIndex::build(&instance);
        assert_eq!(index.count(0), 0);
        assert_eq!(index.count(3), 0);
    }

    #[test]
    fn test_critical_element_tie_breaks_to_smallest() {
        let instance = Instance::from_lists(5, vec![vec![5, 3], vec![3, 5], vec![1]], 1).unwrap();
        let index = FrequencyIndex::build(&instance);
        assert_eq!(index.critical_element(), Some(3));
    }

    #[test]
    fn test_critical_element_empty() {
        let instance = Instance::from_lists(5, vec![], 1).unwrap();
        assert_eq!(FrequencyIndex::build(&instance).critical_element(), None);
    }

    #[test]
    fn test_order_by_frequency() {
        let instance = Instance::from_lists(
            6,
            vec![vec![6, 2, 4], vec![2, 4], vec![4, 1], vec![6]],
            2,
        )
        .unwrap();
        let index = FrequencyIndex::build(&instance);
        // 4:3, 2:2, 6:2, 1:1
        assert_eq!(index.order_by_frequency(&[6, 2, 4, 1]), vec![4, 2, 6, 1]);
    }
}
