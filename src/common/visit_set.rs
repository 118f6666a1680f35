use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;

/// A set of already discovered elements during a traversal.
pub trait VisitSet<I> {
    /// Marks the element as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, index: I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: Ord> VisitSet<I> for BTreeSet<I> {
    fn visit(&mut self, index: I) -> bool {
        self.insert(index)
    }

    fn is_visited(&self, index: &I) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(set: &mut impl VisitSet<usize>) {
        assert!(set.visit(3));
        assert!(!set.visit(3));
        assert!(set.visit(0));
        assert!(set.is_visited(&3));
        assert!(!set.is_visited(&1));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
        assert!(!set.is_visited(&3));
    }

    #[test]
    fn bit_set() {
        exercise(&mut FixedBitSet::new());
    }

    #[test]
    fn bit_set_grows_past_capacity() {
        let mut set = FixedBitSet::with_capacity(2);
        assert!(set.visit(100));
        assert!(set.is_visited(&100));
        assert!(!set.is_visited(&2000));
    }

    #[test]
    fn btree_set() {
        exercise(&mut BTreeSet::new());
    }
}
