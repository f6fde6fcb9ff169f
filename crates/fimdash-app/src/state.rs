// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.

use fimdash_client::ServiceHealth;
use fimdash_core::DashboardConfig;
use fimdash_core::error::FimError;
use fimdash_core::human_errors::humanize_error;

use crate::services::app_services::AppServices;

/// Tone of the banner shown above the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One dismissable message for the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(e: &FimError) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: humanize_error(e).banner(),
        }
    }
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings as last saved.
    pub config: DashboardConfig,
    /// File-watch daemon state for the sidebar indicator.
    pub service_health: ServiceHealth,
    /// Result of the last row action.
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(svc: &AppServices) -> Self {
        Self {
            config: svc.config(),
            service_health: svc.monitor().current(),
            notice: None,
        }
    }
}
