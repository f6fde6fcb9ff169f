// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the FIM dashboard.
//
// Field names follow the backend's JSON (partly Indonesian: `tanggal` = date,
// `jam` = time, `metode` = method, `nama_file` = file name, `path_lengkap` =
// full path); accessors give them English names.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter value meaning "no filter" in single-choice dropdowns.
pub const FILTER_ALL: &str = "all";

/// A record shown in a list view. Only the id matters to list management.
pub trait Row: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

// ---------------------------------------------------------------------------
// File-change events
// ---------------------------------------------------------------------------

/// Classification the backend attaches to a file change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogTag {
    Normal,
    Suspicious,
    Dangerous,
    Other(String),
}

impl LogTag {
    /// Wire value, also used as the `status` filter value.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Suspicious => "mencurigakan",
            Self::Dangerous => "bahaya",
            Self::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Normal => "Normal",
            Self::Suspicious => "Suspicious",
            Self::Dangerous => "Dangerous",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for LogTag {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "mencurigakan" => Self::Suspicious,
            "bahaya" => Self::Dangerous,
            _ => Self::Other(value),
        }
    }
}

impl From<LogTag> for String {
    fn from(tag: LogTag) -> Self {
        tag.as_wire().to_string()
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options of the status dropdown on the log and trash views.
pub const STATUS_FILTERS: [(&str, &str); 4] = [
    ("All", FILTER_ALL),
    ("Normal", "normal"),
    ("Suspicious", "mencurigakan"),
    ("Dangerous", "bahaya"),
];

/// One file-change event (also the shape of a trash entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    #[serde(default)]
    pub tanggal: String,
    #[serde(default)]
    pub jam: String,
    #[serde(default)]
    pub metode: String,
    #[serde(default)]
    pub nama_file: String,
    #[serde(default)]
    pub path_lengkap: String,
    pub tag: Option<LogTag>,
    /// Command that touched the file (per-date reports only).
    #[serde(default)]
    pub comm: Option<String>,
    #[serde(default)]
    pub exe: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

impl LogEntry {
    pub fn date(&self) -> &str {
        &self.tanggal
    }

    pub fn time(&self) -> &str {
        &self.jam
    }

    pub fn method(&self) -> &str {
        &self.metode
    }

    pub fn file_name(&self) -> &str {
        &self.nama_file
    }

    pub fn full_path(&self) -> &str {
        &self.path_lengkap
    }
}

impl Row for LogEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// WordPress activity events
// ---------------------------------------------------------------------------

/// One WordPress audit event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpLogEntry {
    pub id: String,
    /// `YYYY-MM-DD HH:MM:SS` as sent by the backend.
    pub timestamp: String,
    pub category: String,
    pub action: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub details: String,
}

impl WpLogEntry {
    /// Split the timestamp into (date, time).
    pub fn date_and_time(&self) -> (&str, &str) {
        match self.timestamp.split_once(' ') {
            Some((date, time)) => (date, time),
            None => (self.timestamp.as_str(), ""),
        }
    }
}

impl Row for WpLogEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Colour family of an event badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Info,
    Warning,
    Neutral,
}

/// Badge tone of a WordPress action keyword.
pub fn action_tone(action: &str) -> Tone {
    match action.to_ascii_lowercase().as_str() {
        "failed" | "deactivated" | "deleted" => Tone::Negative,
        "success" | "activated" | "installed" => Tone::Positive,
        "updated" | "status changed" => Tone::Info,
        _ => Tone::Neutral,
    }
}

/// Badge tone of a WordPress category.
pub fn category_tone(category: &str) -> Tone {
    match category {
        "Login" => Tone::Positive,
        "Plugin" => Tone::Info,
        "Content" => Tone::Warning,
        _ => Tone::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Paged lists
// ---------------------------------------------------------------------------

/// One page of a backend list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<R> {
    pub results: Vec<R>,
    pub count: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl<R> PageResult<R> {
    pub fn info(&self) -> PaginationInfo {
        PaginationInfo {
            count: self.count,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Pagination metadata of the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub count: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Search text, filters and page of one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// Replace the search text; returns to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Set (or, with an empty value, remove) a filter; returns to page 1.
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let name = name.into();
        if value.is_empty() {
            self.filters.remove(&name);
        } else {
            self.filters.insert(name, value);
        }
        self.page = 1;
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Query-string pairs for a list endpoint: `page`, `search` exactly as
    /// typed when non-empty, and every filter except empty values and `"all"`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("page".to_string(), self.page.max(1).to_string())];
        if !self.search.is_empty() {
            params.push(("search".to_string(), self.search.clone()));
        }
        for (name, value) in &self.filters {
            if value.is_empty() || value == FILTER_ALL {
                continue;
            }
            params.push((name.clone(), value.clone()));
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Per-tag counts of file changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBreakdown {
    #[serde(default)]
    pub bahaya: u64,
    #[serde(default)]
    pub mencurigakan: u64,
    #[serde(default)]
    pub normal: u64,
}

/// File-change statistics for one day (today, or a date picked in the report).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    pub tanggal_analisis: String,
    pub total_perubahan_hari_ini: u64,
    pub detail: TagBreakdown,
}

/// One point of the file-change trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub tanggal: NaiveDate,
    #[serde(default)]
    pub total_perubahan: u64,
    pub detail: TagBreakdown,
}

/// File changes of one day grouped by tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodayLogs {
    pub normal: Vec<LogEntry>,
    pub mencurigakan: Vec<LogEntry>,
    pub bahaya: Vec<LogEntry>,
}

/// WordPress activity counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WpSummary {
    pub login_success: u64,
    pub login_fail: u64,
    pub content_activity: u64,
    pub plugin_activity: u64,
}

/// One point of the WordPress trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpTrendPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub login_success: u64,
    #[serde(default)]
    pub login_fail: u64,
    #[serde(default)]
    pub content: u64,
    #[serde(default)]
    pub plugin: u64,
}

/// Payload of the WordPress analytics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpAnalytics {
    pub summary_today: WpSummary,
    #[serde(default)]
    pub top_5_users: Vec<(String, u64)>,
    #[serde(default)]
    pub top_5_ips: Vec<(String, u64)>,
    #[serde(default)]
    pub top_5_failed_ips: Vec<(String, u64)>,
    #[serde(default)]
    pub trend_analysis: Vec<WpTrendPoint>,
}

/// WordPress events of one day grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WpTodayLogs {
    pub login: Vec<WpLogEntry>,
    pub plugin: Vec<WpLogEntry>,
    pub content: Vec<WpLogEntry>,
    pub user_management: Vec<WpLogEntry>,
    /// Everything else ("lainnya" = other).
    pub lainnya: Vec<WpLogEntry>,
}

/// Day ranges offered above the trend charts.
pub const TREND_DAY_OPTIONS: [u32; 3] = [7, 15, 30];

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Running state of a monitored daemon (the incron file watcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default = "default_service_name")]
    pub name: String,
    pub running: bool,
    #[serde(default)]
    pub detail: Option<String>,
}

fn default_service_name() -> String {
    "incron".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_skip_empty_and_all() {
        let mut q = ListQuery::default();
        q.set_filter("status", FILTER_ALL);
        q.set_filter("user", "");
        assert_eq!(q.to_params(), vec![("page".to_string(), "1".to_string())]);

        q.set_search("  wp-config ");
        q.set_filter("status", "bahaya");
        q.page = 3;
        assert_eq!(
            q.to_params(),
            vec![
                ("page".to_string(), "3".to_string()),
                ("search".to_string(), "  wp-config ".to_string()),
                ("status".to_string(), "bahaya".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_search_is_still_sent() {
        let mut q = ListQuery::default();
        q.set_search(" ");
        assert_eq!(
            q.to_params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("search".to_string(), " ".to_string()),
            ]
        );
    }

    #[test]
    fn search_and_filter_reset_page() {
        let mut q = ListQuery {
            page: 4,
            ..Default::default()
        };
        q.set_search("x");
        assert_eq!(q.page, 1);
        q.page = 4;
        q.set_filter("category", "Login");
        assert_eq!(q.page, 1);
        assert_eq!(q.filter("category"), Some("Login"));
        q.set_filter("category", "");
        assert_eq!(q.filter("category"), None);
    }

    #[test]
    fn page_result_decodes_backend_shape() {
        let json = r#"{
            "results": [{"id": "a1", "tanggal": "2025-01-02", "jam": "10:11:12",
                         "metode": "IN_MODIFY", "nama_file": "index.php",
                         "path_lengkap": "/var/www/index.php", "tag": "bahaya"}],
            "count": 41, "total_pages": 5, "current_page": 2
        }"#;
        let page: PageResult<LogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results[0].id(), "a1");
        assert_eq!(page.results[0].tag, Some(LogTag::Dangerous));
        assert_eq!(page.info().total_pages, 5);
    }

    #[test]
    fn unknown_tag_is_kept() {
        let tag: LogTag = serde_json::from_str(r#""karantina""#).unwrap();
        assert_eq!(tag, LogTag::Other("karantina".into()));
        assert_eq!(serde_json::to_string(&LogTag::Suspicious).unwrap(), r#""mencurigakan""#);
    }

    #[test]
    fn wp_timestamp_splits() {
        let entry = WpLogEntry {
            id: "1".into(),
            timestamp: "2025-03-04 08:09:10".into(),
            category: "Login".into(),
            action: "failed".into(),
            user: "admin".into(),
            ip: "10.0.0.1".into(),
            details: String::new(),
        };
        assert_eq!(entry.date_and_time(), ("2025-03-04", "08:09:10"));
        assert_eq!(action_tone(&entry.action), Tone::Negative);
        assert_eq!(category_tone(&entry.category), Tone::Positive);
    }

    #[test]
    fn wp_analytics_decodes_top_lists() {
        let json = r#"{
            "summary_today": {"login_success": 3, "login_fail": 1,
                              "content_activity": 0, "plugin_activity": 2},
            "top_5_users": [["admin", 7], ["editor", 2]],
            "trend_analysis": [{"date": "2025-03-01", "login_success": 1,
                                "login_fail": 0, "content": 4, "plugin": 0}]
        }"#;
        let analytics: WpAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.top_5_users[0], ("admin".to_string(), 7));
        assert!(analytics.top_5_ips.is_empty());
        assert_eq!(analytics.trend_analysis[0].content, 4);
    }
}
