// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend access for the FIM dashboard: the REST client, the list sources
// and controller that drive every table view, the session gate and the
// file-watch service monitor.

pub mod api;
pub mod controller;
pub mod endpoints;
pub mod session;
pub mod source;
pub mod status;

pub use api::ApiClient;
pub use controller::{ControllerOptions, FilterMode, ListController, ListState, LoadStatus};
pub use session::{AuthState, RouteDecision, RouteKind, Session};
pub use source::{ListSource, LogSource, TrashSource, WpLogSource};
pub use status::{ServiceHealth, ServiceMonitor};
