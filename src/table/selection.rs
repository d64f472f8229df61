//! Selection State
//!
//! Tracks which row identities are currently selected.

use hashlink::LinkedHashSet;
use std::hash::Hash;

/// Set of selected row identities, in the order they were selected
#[derive(Debug, Clone)]
pub struct SelectionSet<K: Eq + Hash> {
    ids: LinkedHashSet<K>,
}

impl<K: Eq + Hash + Clone> SelectionSet<K> {
    pub fn new() -> Self {
        Self {
            ids: LinkedHashSet::new(),
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of one id; returns the new membership
    pub fn toggle(&mut self, id: K) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn remove(&mut self, id: &K) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with exactly `ids`
    pub fn select_only(&mut self, ids: impl IntoIterator<Item = K>) {
        self.ids.clear();
        self.ids.extend(ids);
    }

    /// Drop every id not accepted by `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let dropped: Vec<K> = self.ids.iter().filter(|id| !keep(id)).cloned().collect();
        for id in &dropped {
            self.ids.remove(id);
        }
    }

    /// Whether every id in `visible` is selected (false for an empty page)
    pub fn covers<'a>(&self, visible: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        let mut any = false;
        for id in visible {
            any = true;
            if !self.ids.contains(id) {
                return false;
            }
        }
        any
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.ids.iter()
    }
}

impl<K: Eq + Hash + Clone> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(7));
        assert!(selection.contains(&7));
        assert!(!selection.toggle(7));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_covers_requires_non_empty_page() {
        let selection: SelectionSet<u32> = SelectionSet::new();
        assert!(!selection.covers(&[]));
    }

    #[test]
    fn test_covers_all_visible() {
        let mut selection = SelectionSet::new();
        selection.select_only([1, 2, 3]);
        assert!(selection.covers(&[1, 2, 3]));
        assert!(!selection.covers(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_retain_prunes_missing_ids() {
        let mut selection = SelectionSet::new();
        selection.select_only(["a".to_string(), "b".to_string()]);
        selection.retain(|id| id == "b");
        assert_eq!(selection.iter().cloned().collect::<Vec<_>>(), vec!["b".to_string()]);
    }
}
