// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service container: owns the backend client, the session gate and
// the file-watch monitor, and builds one list controller per table view.
//
// Everything inside is cheaply cloneable so the struct can be moved into
// event handlers and async blocks.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fimdash_client::{
    ApiClient, ControllerOptions, FilterMode, ListController, LogSource, ServiceMonitor, Session,
    TrashSource, WpLogSource,
};
use fimdash_core::config::{load_config, persist_config};
use fimdash_core::error::Result;
use fimdash_core::{DashboardConfig, LogAction, TrashAction};
use tracing::{info, warn};

use super::data_dir;

/// Shared services, available via `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    api: ApiClient,
    session: Session,
    monitor: ServiceMonitor,
    data_dir: PathBuf,
    config: Arc<Mutex<DashboardConfig>>,
}

// Clones share one container; two containers are never equal.
impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

impl AppServices {
    /// Load settings from the data directory and build the services.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        let config = load_config(&dir).with_env_overrides();
        Self::with_config(dir, config)
    }

    /// Built-in defaults, used when the stored settings are unusable. The
    /// environment is not consulted again.
    pub fn fallback() -> Result<Self> {
        Self::fallback_in(data_dir::data_dir())
    }

    fn fallback_in(data_dir: PathBuf) -> Result<Self> {
        Self::with_config(data_dir, DashboardConfig::default())
    }

    pub fn with_config(data_dir: PathBuf, config: DashboardConfig) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        info!(base = %api.base_url(), "backend client ready");
        Ok(Self {
            session: Session::new(api.clone()),
            monitor: ServiceMonitor::new(api.clone(), &config),
            api,
            data_dir,
            config: Arc::new(Mutex::new(config)),
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> Session {
        self.session.clone()
    }

    pub fn monitor(&self) -> ServiceMonitor {
        self.monitor.clone()
    }

    // -- List controllers ----------------------------------------------------

    fn options(&self, filter_mode: FilterMode) -> ControllerOptions {
        ControllerOptions::from_config(&self.config(), filter_mode)
    }

    pub fn log_controller(&self) -> ListController<LogSource> {
        ListController::new(LogSource(self.api.clone()), self.options(FilterMode::Live))
    }

    pub fn trash_controller(&self) -> ListController<TrashSource> {
        ListController::new(TrashSource(self.api.clone()), self.options(FilterMode::Live))
    }

    pub fn wp_log_controller(&self) -> ListController<WpLogSource> {
        ListController::new(
            WpLogSource(self.api.clone()),
            self.options(FilterMode::Deferred),
        )
    }

    // -- Row actions ---------------------------------------------------------

    pub async fn run_log_action(&self, action: &LogAction) -> Result<()> {
        match action {
            LogAction::Trash(id) => self.api.trash_log(id).await,
            LogAction::TrashSelected(ids) => self.api.trash_logs(ids).await,
        }
    }

    pub async fn run_trash_action(&self, action: &TrashAction) -> Result<()> {
        match action {
            TrashAction::Restore(id) => self.api.restore(id).await,
            TrashAction::Delete(id) => self.api.delete_permanently(id).await,
            TrashAction::DeleteSelected(ids) => self.api.delete_many_permanently(ids).await,
            TrashAction::Empty => self.api.empty_trash().await,
        }
    }

    // -- Config persistence --------------------------------------------------

    pub fn config(&self) -> DashboardConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Validate, store and persist new settings. The backend URL and timeouts
    /// take effect on the next start.
    pub fn save_config(&self, config: &DashboardConfig) -> Result<()> {
        config.validate()?;
        persist_config(&self.data_dir, config)?;
        if config.api_base_url != self.config().api_base_url {
            warn!("backend URL changed; restart to reconnect");
        }
        *self.config.lock().expect("config lock poisoned") = config.clone();
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
