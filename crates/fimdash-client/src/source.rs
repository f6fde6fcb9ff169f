// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paged collections a list view can be driven from.

use async_trait::async_trait;

use fimdash_core::error::Result;
use fimdash_core::{ListQuery, LogEntry, PageResult, Row, WpLogEntry};

use crate::api::ApiClient;

/// Something that answers a `ListQuery` with one page of rows.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Row: Row;

    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    async fn fetch(&self, query: &ListQuery) -> Result<PageResult<Self::Row>>;
}

/// The file-change log (`logs/`).
#[derive(Clone)]
pub struct LogSource(pub ApiClient);

#[async_trait]
impl ListSource for LogSource {
    type Row = LogEntry;

    fn name(&self) -> &'static str {
        "logs"
    }

    async fn fetch(&self, query: &ListQuery) -> Result<PageResult<LogEntry>> {
        self.0.list_logs(query).await
    }
}

/// Soft-deleted file-change entries (`trash/`).
#[derive(Clone)]
pub struct TrashSource(pub ApiClient);

#[async_trait]
impl ListSource for TrashSource {
    type Row = LogEntry;

    fn name(&self) -> &'static str {
        "trash"
    }

    async fn fetch(&self, query: &ListQuery) -> Result<PageResult<LogEntry>> {
        self.0.list_trash(query).await
    }
}

/// WordPress audit events (`wp-logs/`).
#[derive(Clone)]
pub struct WpLogSource(pub ApiClient);

#[async_trait]
impl ListSource for WpLogSource {
    type Row = WpLogEntry;

    fn name(&self) -> &'static str {
        "wp-logs"
    }

    async fn fetch(&self, query: &ListQuery) -> Result<PageResult<WpLogEntry>> {
        self.0.list_wp_logs(query).await
    }
}
