// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// FIM dashboard core: types, errors and the list-management logic shared by
// every table view (pagination window, row selection, chart scaling).

pub mod actions;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod pagination;
pub mod selection;
pub mod types;

pub use actions::{LogAction, TrashAction};
pub use config::DashboardConfig;
pub use error::FimError;
pub use pagination::{PageItem, compute_window};
pub use selection::{BulkAction, SelectionPolicy, SelectionSet};
pub use types::*;
