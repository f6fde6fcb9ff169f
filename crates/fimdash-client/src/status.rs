// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Polls the file-watch daemon (incron) status for the sidebar indicator.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use fimdash_core::error::Result;
use fimdash_core::{DashboardConfig, ServiceStatus};

use crate::api::ApiClient;

/// What the indicator shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceHealth {
    /// No answer yet.
    Unknown,
    Running,
    Stopped(Option<String>),
    /// The status endpoint itself failed.
    Unreachable(String),
}

impl ServiceHealth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "checking",
            Self::Running => "active",
            Self::Stopped(_) => "inactive",
            Self::Unreachable(_) => "unreachable",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Map one poll result onto the indicator state.
pub fn classify(result: &Result<ServiceStatus>) -> ServiceHealth {
    match result {
        Ok(status) if status.running => ServiceHealth::Running,
        Ok(status) => ServiceHealth::Stopped(status.detail.clone()),
        Err(e) => ServiceHealth::Unreachable(e.to_string()),
    }
}

/// Background poller. One per app.
#[derive(Clone)]
pub struct ServiceMonitor {
    api: ApiClient,
    path: String,
    interval: Duration,
    tx: watch::Sender<ServiceHealth>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ServiceMonitor {
    pub fn new(api: ApiClient, config: &DashboardConfig) -> Self {
        let (tx, _rx) = watch::channel(ServiceHealth::Unknown);
        Self {
            api,
            path: config.service_status_path.clone(),
            interval: config.status_poll_interval(),
            tx,
            task: Arc::new(Mutex::new(None)),
        }
    }

    pub fn current(&self) -> ServiceHealth {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ServiceHealth> {
        self.tx.subscribe()
    }

    /// Poll once and publish the result.
    pub async fn poll_once(&self) -> ServiceHealth {
        let health = classify(&self.api.service_status(&self.path).await);
        let changed = self.tx.send_if_modified(|current| {
            if *current == health {
                false
            } else {
                *current = health.clone();
                true
            }
        });
        if changed {
            match &health {
                ServiceHealth::Unreachable(e) => warn!(error = %e, "service status unavailable"),
                other => info!(state = other.label(), "service status changed"),
            }
        }
        health
    }

    /// Start polling every `status_poll_secs`. Calling again is a no-op.
    pub fn start(&self) {
        let mut task = self.task.lock().expect("monitor task lock poisoned");
        if task.as_ref().is_some_and(|t| !t.is_finished()) {
            return;
        }
        let monitor = self.clone();
        debug!(interval = ?self.interval, path = %self.path, "starting service monitor");
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(monitor.interval);
            loop {
                ticker.tick().await;
                monitor.poll_once().await;
            }
        }));
    }

    pub fn stop(&self) {
        if let Some(task) = self.task.lock().expect("monitor task lock poisoned").take() {
            task.abort();
        }
    }
}
