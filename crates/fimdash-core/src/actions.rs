// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Row actions on the log and trash views, and which of them need the
// operator to confirm first.

use crate::selection::BulkAction;

/// Actions available on the file-change log view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogAction {
    /// Move one entry to the trash.
    Trash(String),
    /// Move every selected entry to the trash.
    TrashSelected(Vec<String>),
}

impl LogAction {
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::TrashSelected(_))
    }

    pub fn confirmation_prompt(&self) -> Option<String> {
        match self {
            Self::Trash(_) => None,
            Self::TrashSelected(ids) => Some(format!(
                "Move {} selected log(s) to the trash?",
                ids.len()
            )),
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Self::Trash(_) => "Log moved to the trash".to_string(),
            Self::TrashSelected(ids) => format!("{} log(s) moved to the trash", ids.len()),
        }
    }

    /// The bulk action to settle the selection with, if any.
    pub fn bulk(&self) -> Option<BulkAction> {
        match self {
            Self::Trash(_) => None,
            Self::TrashSelected(_) => Some(BulkAction::MoveToTrash),
        }
    }
}

/// Actions available on the trash view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrashAction {
    Restore(String),
    Delete(String),
    DeleteSelected(Vec<String>),
    Empty,
}

impl TrashAction {
    /// Everything except restore is irreversible.
    pub fn requires_confirmation(&self) -> bool {
        !matches!(self, Self::Restore(_))
    }

    pub fn confirmation_prompt(&self) -> Option<String> {
        match self {
            Self::Restore(_) => None,
            Self::Delete(_) => {
                Some("Permanently delete this log? This cannot be undone.".to_string())
            }
            Self::DeleteSelected(ids) => Some(format!(
                "Permanently delete {} selected log(s)? This cannot be undone.",
                ids.len()
            )),
            Self::Empty => {
                Some("Empty the trash? Every log in it will be deleted permanently.".to_string())
            }
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Self::Restore(_) => "Log restored".to_string(),
            Self::Delete(_) => "Log deleted permanently".to_string(),
            Self::DeleteSelected(ids) => format!("{} log(s) deleted permanently", ids.len()),
            Self::Empty => "Trash emptied".to_string(),
        }
    }

    pub fn bulk(&self) -> Option<BulkAction> {
        match self {
            Self::DeleteSelected(_) => Some(BulkAction::PermanentDelete),
            _ => None,
        }
    }

    /// Emptying the trash also resets search, filters and page.
    pub fn resets_query(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_actions_need_confirmation() {
        assert!(!LogAction::Trash("1".into()).requires_confirmation());
        assert!(LogAction::TrashSelected(vec!["1".into()]).requires_confirmation());

        assert!(!TrashAction::Restore("1".into()).requires_confirmation());
        assert!(TrashAction::Delete("1".into()).requires_confirmation());
        assert!(TrashAction::DeleteSelected(vec![]).requires_confirmation());
        assert!(TrashAction::Empty.requires_confirmation());
    }

    #[test]
    fn prompts_name_the_count() {
        let action = TrashAction::DeleteSelected(vec!["a".into(), "b".into()]);
        assert!(action.confirmation_prompt().unwrap().contains('2'));
        assert_eq!(LogAction::Trash("a".into()).confirmation_prompt(), None);
    }

    #[test]
    fn bulk_mapping() {
        assert_eq!(
            LogAction::TrashSelected(vec![]).bulk(),
            Some(BulkAction::MoveToTrash)
        );
        assert_eq!(
            TrashAction::DeleteSelected(vec![]).bulk(),
            Some(BulkAction::PermanentDelete)
        );
        assert_eq!(TrashAction::Empty.bulk(), None);
        assert!(TrashAction::Empty.resets_query());
    }
}
