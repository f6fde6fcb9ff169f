// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed calls for every backend route the dashboard uses.

use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use fimdash_core::error::Result;
use fimdash_core::{
    HistoricalEntry, ListQuery, LogEntry, PageResult, ServiceStatus, TodayLogs, TodayStats,
    WpAnalytics, WpLogEntry, WpSummary, WpTodayLogs,
};

use crate::api::ApiClient;

#[derive(Serialize)]
struct IdBody<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct IdsBody<'a> {
    ids: &'a [String],
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// The WordPress by-date stats come wrapped in `{ detail: ... }`.
#[derive(Deserialize)]
struct WpStatsEnvelope {
    detail: WpSummary,
}

fn date_param(date: NaiveDate) -> Vec<(String, String)> {
    vec![("date".to_string(), date.format("%Y-%m-%d").to_string())]
}

fn days_param(days: u32) -> Vec<(String, String)> {
    vec![("days".to_string(), days.to_string())]
}

impl ApiClient {
    // -- Session -------------------------------------------------------------

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.send(
            Method::POST,
            "login/",
            Some(&Credentials { username, password }),
        )
        .await?;
        info!("signed in");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let result = self.send::<()>(Method::POST, "logout/", None).await;
        self.forget_session();
        result
    }

    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> Result<()> {
        self.get_json::<serde_json::Value>("check-auth/", &[])
            .await
            .map(|_| ())
    }

    // -- File-change log -----------------------------------------------------

    #[instrument(skip(self), fields(page = query.page))]
    pub async fn list_logs(&self, query: &ListQuery) -> Result<PageResult<LogEntry>> {
        self.get_json("logs/", &query.to_params()).await
    }

    #[instrument(skip(self))]
    pub async fn trash_log(&self, id: &str) -> Result<()> {
        self.send(Method::DELETE, "logs/", Some(&IdBody { id })).await
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn trash_logs(&self, ids: &[String]) -> Result<()> {
        self.send(Method::DELETE, "logs/", Some(&IdsBody { ids }))
            .await
    }

    // -- Trash ---------------------------------------------------------------

    #[instrument(skip(self), fields(page = query.page))]
    pub async fn list_trash(&self, query: &ListQuery) -> Result<PageResult<LogEntry>> {
        self.get_json("trash/", &query.to_params()).await
    }

    #[instrument(skip(self))]
    pub async fn restore(&self, id: &str) -> Result<()> {
        self.send::<()>(Method::POST, &format!("trash/{id}/restore/"), None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_permanently(&self, id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &format!("trash/{id}/"), None)
            .await
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_many_permanently(&self, ids: &[String]) -> Result<()> {
        self.send(Method::DELETE, "trash/", Some(&IdsBody { ids }))
            .await
    }

    #[instrument(skip(self))]
    pub async fn empty_trash(&self) -> Result<()> {
        self.send::<()>(Method::DELETE, "trash/", None).await
    }

    // -- WordPress log -------------------------------------------------------

    #[instrument(skip(self), fields(page = query.page))]
    pub async fn list_wp_logs(&self, query: &ListQuery) -> Result<PageResult<WpLogEntry>> {
        self.get_json("wp-logs/", &query.to_params()).await
    }

    // -- File-change analytics -----------------------------------------------

    pub async fn today_stats(&self) -> Result<TodayStats> {
        self.get_json("logs/analytics/", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn history(&self, days: u32) -> Result<Vec<HistoricalEntry>> {
        self.get_json("logs/analytics/historical/", &days_param(days))
            .await
    }

    pub async fn today_logs(&self) -> Result<TodayLogs> {
        self.get_json("logs/today/", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn stats_by_date(&self, date: NaiveDate) -> Result<TodayStats> {
        self.get_json("logs/stats-by-date/", &date_param(date))
            .await
    }

    #[instrument(skip(self))]
    pub async fn logs_by_date(&self, date: NaiveDate) -> Result<TodayLogs> {
        self.get_json("logs/by-date/", &date_param(date)).await
    }

    // -- WordPress analytics -------------------------------------------------

    #[instrument(skip(self))]
    pub async fn wp_analytics(&self, days: u32) -> Result<WpAnalytics> {
        self.get_json("wp-logs/analytics/", &days_param(days))
            .await
    }

    pub async fn wp_today_logs(&self) -> Result<WpTodayLogs> {
        self.get_json("wp-logs/today/", &[]).await
    }

    #[instrument(skip(self))]
    pub async fn wp_stats_by_date(&self, date: NaiveDate) -> Result<WpSummary> {
        let envelope: WpStatsEnvelope = self
            .get_json("wp-logs/stats-by-date/", &date_param(date))
            .await?;
        Ok(envelope.detail)
    }

    #[instrument(skip(self))]
    pub async fn wp_logs_by_date(&self, date: NaiveDate) -> Result<WpTodayLogs> {
        self.get_json("wp-logs/by-date/", &date_param(date)).await
    }

    // -- Services ------------------------------------------------------------

    pub async fn service_status(&self, path: &str) -> Result<ServiceStatus> {
        self.get_json(path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_bodies_match_backend_shape() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            serde_json::to_string(&IdsBody { ids: &ids }).unwrap(),
            r#"{"ids":["a","b"]}"#
        );
        assert_eq!(
            serde_json::to_string(&IdBody { id: "7" }).unwrap(),
            r#"{"id":"7"}"#
        );
    }

    #[test]
    fn date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(date_param(date), vec![("date".to_string(), "2025-01-09".to_string())]);
    }

    #[test]
    fn wp_stats_unwrap_detail() {
        let json = r#"{"detail": {"login_success": 2, "login_fail": 5}}"#;
        let envelope: WpStatsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.detail.login_fail, 5);
        assert_eq!(envelope.detail.plugin_activity, 0);
    }
}
