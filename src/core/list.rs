//! Per-pane list registry
//!
//! Every rendered pane registers its item count under its position in the
//! pane stack. Navigation always targets the highest registered index, the
//! deepest visible pane.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ListEntry {
    item_count: usize,
    highlighted: Option<usize>,
}

/// Item counts and highlighted positions keyed by list index
#[derive(Debug, Clone, Default)]
pub struct ListRegistry {
    lists: BTreeMap<usize, ListEntry>,
}

impl ListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or update) the number of navigable items of a list.
    ///
    /// A highlight that no longer fits the new count is cleared.
    pub fn register_list(&mut self, index: usize, item_count: usize) {
        let entry = self.lists.entry(index).or_default();
        entry.item_count = item_count;
        if entry.highlighted.is_some_and(|h| h >= item_count) {
            entry.highlighted = None;
        }
        log::trace!("list {} registered with {} items", index, item_count);
    }

    pub fn unregister_list(&mut self, index: usize) {
        self.lists.remove(&index);
    }

    /// Drop every list whose pane no longer exists
    pub fn retain_lists(&mut self, pane_count: usize) {
        self.lists.retain(|&index, _| index < pane_count);
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Set or clear the highlighted item of a list.
    ///
    /// Returns false when the list is unknown or the position is out of
    /// range; the registry is left untouched in that case.
    pub fn set_highlighted(&mut self, index: usize, position: Option<usize>) -> bool {
        match self.lists.get_mut(&index) {
            Some(entry) if position.is_none_or(|p| p < entry.item_count) => {
                entry.highlighted = position;
                true
            }
            _ => false,
        }
    }

    pub fn highlighted(&self, index: usize) -> Option<usize> {
        self.lists.get(&index).and_then(|entry| entry.highlighted)
    }

    pub fn item_count(&self, index: usize) -> Option<usize> {
        self.lists.get(&index).map(|entry| entry.item_count)
    }

    /// Highest registered list index
    pub fn last_list_index(&self) -> Option<usize> {
        self.lists.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Position ArrowDown moves to, wrapping past the last item
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let entry = self.lists.get(&index)?;
        if entry.item_count == 0 {
            return None;
        }
        Some(match entry.highlighted {
            Some(h) => (h + 1) % entry.item_count,
            None => 0,
        })
    }

    /// Position ArrowUp moves to, wrapping before the first item
    pub fn prev_index(&self, index: usize) -> Option<usize> {
        let entry = self.lists.get(&index)?;
        if entry.item_count == 0 {
            return None;
        }
        Some(match entry.highlighted {
            Some(0) | None => entry.item_count - 1,
            Some(h) => h - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_has_no_last_index() {
        let registry = ListRegistry::new();
        assert_eq!(registry.last_list_index(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_last_list_index_is_highest() {
        let mut registry = ListRegistry::new();
        registry.register_list(2, 4);
        registry.register_list(0, 1);
        registry.register_list(1, 3);
        assert_eq!(registry.last_list_index(), Some(2));

        registry.unregister_list(2);
        assert_eq!(registry.last_list_index(), Some(1));
    }

    #[test]
    fn test_lists_are_independent() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 5);
        registry.register_list(1, 2);
        registry.set_highlighted(0, Some(4));
        registry.register_list(1, 8);

        assert_eq!(registry.item_count(0), Some(5));
        assert_eq!(registry.highlighted(0), Some(4));
        assert_eq!(registry.item_count(1), Some(8));
    }

    #[test]
    fn test_set_highlighted_bounds() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 2);
        assert!(registry.set_highlighted(0, Some(1)));
        assert!(!registry.set_highlighted(0, Some(2)));
        assert_eq!(registry.highlighted(0), Some(1));
        assert!(!registry.set_highlighted(7, Some(0)));
        assert!(registry.set_highlighted(0, None));
        assert_eq!(registry.highlighted(0), None);
    }

    #[test]
    fn test_shrinking_list_clears_stale_highlight() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 5);
        registry.set_highlighted(0, Some(4));
        registry.register_list(0, 3);
        assert_eq!(registry.highlighted(0), None);
    }

    #[test]
    fn test_retain_lists_prunes_removed_panes() {
        let mut registry = ListRegistry::new();
        for index in 0..4 {
            registry.register_list(index, 1);
        }
        registry.retain_lists(2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.last_list_index(), Some(1));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 3);
        registry.set_highlighted(0, Some(1));
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.highlighted(0), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 3);

        assert_eq!(registry.next_index(0), Some(0));
        assert_eq!(registry.prev_index(0), Some(2));

        registry.set_highlighted(0, Some(2));
        assert_eq!(registry.next_index(0), Some(0));
        assert_eq!(registry.prev_index(0), Some(1));

        registry.set_highlighted(0, Some(0));
        assert_eq!(registry.prev_index(0), Some(2));
    }

    #[test]
    fn test_next_on_empty_or_unknown_list() {
        let mut registry = ListRegistry::new();
        registry.register_list(0, 0);
        assert_eq!(registry.next_index(0), None);
        assert_eq!(registry.prev_index(0), None);
        assert_eq!(registry.next_index(3), None);
    }
}
