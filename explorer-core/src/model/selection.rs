//! Ordered set of selected node indices.

use indexmap::IndexSet;

/// Selected candidate indices, unique and kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: IndexSet<usize>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.shift_remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores() {
        let mut set = SelectionSet::new();
        set.toggle(4);
        let before = set.clone();

        assert!(set.toggle(2));
        assert!(!set.toggle(2));
        assert_eq!(set, before);
    }

    #[test]
    fn keeps_selection_order() {
        let mut set = SelectionSet::new();
        set.toggle(5);
        set.toggle(1);
        set.toggle(3);
        set.toggle(1);
        assert_eq!(set.iter().collect::<Vec<_>>(), [5, 3]);
    }
}
