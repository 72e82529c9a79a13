//! Row selection for bulk actions.
//!
//! Every dashboard lets the user check rows and apply an action to all of
//! them at once. [`SelectionSet`] tracks the checked record ids.
//!
//! Select-all is scoped to the **currently filtered view**, not the full
//! store, and behaves as a toggle: selecting all when the view is already
//! exactly selected clears the selection.
//!
//! Invariant: the selection never holds an id absent from the store. The
//! dashboard facade prunes the selection whenever records are deleted.

use std::collections::HashSet;

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<Uuid>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present.
    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Toggle-style select-all over the given view.
    ///
    /// If the selection already equals the view's id set exactly, the
    /// selection is cleared; otherwise it is replaced by the view's ids.
    pub fn select_all(&mut self, view_ids: &[Uuid]) {
        let view_set: HashSet<Uuid> = view_ids.iter().copied().collect();
        if self.ids == view_set {
            self.ids.clear();
        } else {
            self.ids = view_set;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every id not present in `existing` (e.g., after a delete).
    pub fn retain_existing(&mut self, existing: &HashSet<Uuid>) {
        self.ids.retain(|id| existing.contains(id));
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &Uuid> {
        self.ids.iter()
    }

    /// The selected ids in the order they appear in `view_ids`.
    /// Ids selected but not in the view are omitted.
    pub fn in_view_order(&self, view_ids: &[Uuid]) -> Vec<Uuid> {
        view_ids
            .iter()
            .filter(|id| self.ids.contains(id))
            .copied()
            .collect()
    }
}
