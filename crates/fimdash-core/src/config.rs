// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FimError, Result};
use crate::selection::SelectionPolicy;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "FIMDASH_API_URL";

/// Name of the persisted settings file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the REST backend, including the `/api/` prefix.
    pub api_base_url: String,
    /// Upper bound for a single backend request.
    pub request_timeout_secs: u64,
    /// Quiet period before a search / live-filter edit triggers a fetch.
    pub search_debounce_ms: u64,
    /// Whether selections survive pagination and search changes.
    pub selection_policy: SelectionPolicy,
    /// How often the file-watch daemon status is polled.
    pub status_poll_secs: u64,
    /// Backend path of the file-watch daemon status endpoint.
    pub service_status_path: String,
    /// Default range of the trend charts, in days.
    pub trend_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api/".to_string(),
            request_timeout_secs: 15,
            search_debounce_ms: 500,
            selection_policy: SelectionPolicy::Retain,
            status_poll_secs: 10,
            service_status_path: "incron/status/".to_string(),
            trend_days: 7,
        }
    }
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs.max(1))
    }

    /// Apply `FIMDASH_API_URL` if it is set and non-empty. A value that is
    /// not an http(s) URL is ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        let Ok(url) = std::env::var(API_URL_ENV) else {
            return self;
        };
        let url = url.trim();
        if url.is_empty() {
            return self;
        }
        if !is_http_url(url) {
            warn!(var = API_URL_ENV, url, "ignoring api base URL override that is not http(s)");
            return self;
        }
        debug!(url, "api base URL overridden from environment");
        self.api_base_url = url.to_string();
        self
    }

    /// Reject settings the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !is_http_url(url) {
            return Err(FimError::Config(format!(
                "api_base_url must start with http:// or https:// (got '{url}')"
            )));
        }
        if !(7..=90).contains(&self.trend_days) {
            return Err(FimError::Config(format!(
                "trend_days must be between 7 and 90 (got {})",
                self.trend_days
            )));
        }
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Load settings from `data_dir/config.json`, falling back to defaults when
/// the file is missing or unreadable.
pub fn load_config(data_dir: &Path) -> DashboardConfig {
    let path = data_dir.join(CONFIG_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(_) => return DashboardConfig::default(),
    };
    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            DashboardConfig::default()
        }
    }
}

/// Persist settings to `data_dir/config.json`.
pub fn persist_config(data_dir: &Path, config: &DashboardConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_conventions() {
        let config = DashboardConfig::default();
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.selection_policy, SelectionPolicy::Retain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn persisted_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            api_base_url: "https://fim.example.org/api/".into(),
            selection_policy: SelectionPolicy::PruneToPage,
            trend_days: 30,
            ..Default::default()
        };
        persist_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()), config);
    }

    #[test]
    fn missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()), DashboardConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(load_config(dir.path()), DashboardConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"search_debounce_ms": 250}"#).unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = DashboardConfig {
            api_base_url: "localhost:5000".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FimError::Config(_))));
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn env_override_applies_only_http_urls() {
        unsafe { std::env::set_var(API_URL_ENV, "  https://fim.example.org/api/ ") };
        let config = DashboardConfig::default().with_env_overrides();
        assert_eq!(config.api_base_url, "https://fim.example.org/api/");

        unsafe { std::env::set_var(API_URL_ENV, "localhost:5000/api/") };
        let config = DashboardConfig::default().with_env_overrides();
        assert_eq!(config.api_base_url, DashboardConfig::default().api_base_url);
        assert!(config.validate().is_ok());

        unsafe { std::env::remove_var(API_URL_ENV) };
    }

    #[test]
    fn validate_bounds_trend_range() {
        for days in [7, 30, 90] {
            let config = DashboardConfig {
                trend_days: days,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{days} days should be accepted");
        }
        for days in [0, 6, 91] {
            let config = DashboardConfig {
                trend_days: days,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{days} days should be rejected");
        }
    }
}
