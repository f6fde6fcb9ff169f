// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Row selection for bulk actions.
//
// The set is keyed by row id and, by default, is NOT pruned when the visible
// page changes: an id selected on page 2 is still selected after moving to
// page 3. `SelectionPolicy::PruneToPage` switches to "only what is visible".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happens to selected ids that are not on the newly shown page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Keep them (cross-page bulk selection).
    #[default]
    Retain,
    /// Drop them, so bulk actions only touch visible rows.
    PruneToPage,
}

/// Bulk actions that consume the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Soft delete from the log view.
    MoveToTrash,
    /// Hard delete from the trash view.
    PermanentDelete,
}

/// Selected row ids plus the select-mode flag of one list view.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
    active: bool,
    policy: SelectionPolicy,
}

impl SelectionSet {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            ids: BTreeSet::new(),
            active: false,
            policy,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    // -- Select mode ---------------------------------------------------------

    /// Whether checkboxes are currently shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enter or leave select mode. Either transition starts from empty.
    pub fn toggle_mode(&mut self) {
        self.active = !self.active;
        self.ids.clear();
    }

    pub fn exit_mode(&mut self) {
        self.active = false;
        self.ids.clear();
    }

    // -- Membership ----------------------------------------------------------

    /// Insert `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select exactly `page_ids`, or clear if that is already the selection.
    pub fn select_all<I, S>(&mut self, page_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: BTreeSet<String> = page_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        if self.ids == wanted {
            self.ids.clear();
        } else {
            self.ids = wanted;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids, sorted, for a bulk request body.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Whether every id of the page is selected (drives the header checkbox).
    pub fn covers<I, S>(&self, page_ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        for id in page_ids {
            any = true;
            if !self.ids.contains(id.as_ref()) {
                return false;
            }
        }
        any
    }

    // -- Lifecycle hooks -----------------------------------------------------

    /// Called whenever a new page of rows replaces the previous one.
    pub fn observe_page<I, S>(&mut self, page_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.policy == SelectionPolicy::Retain {
            return;
        }
        let visible: BTreeSet<String> = page_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let before = self.ids.len();
        self.ids.retain(|id| visible.contains(id));
        if self.ids.len() != before {
            debug!(dropped = before - self.ids.len(), "pruned selection to visible page");
        }
    }

    /// Called once a bulk action has finished.
    ///
    /// Move-to-trash keeps the selection on failure so the operator can retry;
    /// permanent delete always clears it.
    pub fn settle(&mut self, action: BulkAction, succeeded: bool) {
        match action {
            BulkAction::MoveToTrash if !succeeded => {}
            BulkAction::MoveToTrash | BulkAction::PermanentDelete => self.ids.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> SelectionSet {
        SelectionSet::new(SelectionPolicy::Retain)
    }

    #[test]
    fn double_toggle_is_noop() {
        let mut s = set();
        s.toggle("x");
        assert!(s.is_selected("x"));
        s.toggle("x");
        assert!(s.is_empty());
    }

    #[test]
    fn select_all_twice_toggles() {
        let mut s = set();
        s.select_all(["a", "b"]);
        assert_eq!(s.ids(), vec!["a", "b"]);
        s.select_all(["a", "b"]);
        assert!(s.is_empty());
    }

    #[test]
    fn select_all_replaces_partial_selection() {
        let mut s = set();
        s.toggle("A");
        s.toggle("B");
        s.select_all(["A", "B", "C"]);
        assert_eq!(s.ids(), vec!["A", "B", "C"]);
        s.select_all(["A", "B", "C"]);
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn select_all_replaces_foreign_ids() {
        let mut s = set();
        s.toggle("from-page-1");
        s.select_all(["p2-a", "p2-b"]);
        assert!(!s.is_selected("from-page-1"));
        assert_eq!(s.count(), 2);
    }

    #[test]
    fn mode_transitions_clear() {
        let mut s = set();
        s.toggle_mode();
        assert!(s.is_active());
        s.toggle("a");
        s.toggle_mode();
        assert!(!s.is_active());
        assert!(s.is_empty());

        s.toggle_mode();
        s.toggle("b");
        s.exit_mode();
        assert!(!s.is_active());
        assert!(s.is_empty());
    }

    #[test]
    fn retain_policy_keeps_offscreen_ids() {
        let mut s = set();
        s.toggle("a");
        s.observe_page(["c", "d"]);
        assert!(s.is_selected("a"));
    }

    #[test]
    fn prune_policy_drops_offscreen_ids() {
        let mut s = SelectionSet::new(SelectionPolicy::PruneToPage);
        s.toggle("a");
        s.toggle("c");
        s.observe_page(["c", "d"]);
        assert_eq!(s.ids(), vec!["c"]);
    }

    #[test]
    fn failed_move_keeps_selection() {
        let mut s = set();
        s.toggle("a");
        s.settle(BulkAction::MoveToTrash, false);
        assert_eq!(s.count(), 1);
        s.settle(BulkAction::MoveToTrash, true);
        assert!(s.is_empty());
    }

    #[test]
    fn permanent_delete_always_clears() {
        let mut s = set();
        s.toggle("a");
        s.settle(BulkAction::PermanentDelete, false);
        assert!(s.is_empty());
    }

    #[test]
    fn covers_requires_every_page_id() {
        let mut s = set();
        assert!(!s.covers(Vec::<String>::new()));
        s.select_all(["a", "b"]);
        assert!(s.covers(["a", "b"]));
        assert!(!s.covers(["a", "b", "c"]));
    }
}
