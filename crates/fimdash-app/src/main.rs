// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// FIM dashboard: file integrity and WordPress activity monitoring console
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;
use fimdash_client::{RouteDecision, RouteKind, ServiceHealth};
use fimdash_core::human_errors::humanize_error;

use pages::analytics::Analytics;
use pages::log::Log;
use pages::login::Login;
use pages::settings::Settings;
use pages::trash::Trash;
use pages::wp_analytics::WpAnalytics;
use pages::wp_log::WpLog;

use services::app_services::AppServices;
use state::{AppState, NoticeKind};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("fimdash starting");

    dioxus::launch(app);
}

/// Top-level route enum. Everything except the login page sits behind the
/// session gate in `DashboardLayout`.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
    #[route("/")]
    Analytics {},
    #[route("/log")]
    Log {},
    #[route("/trash")]
    Trash {},
    #[route("/wp-log")]
    WpLog {},
    #[route("/wp-analytics")]
    WpAnalytics {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    let services = use_hook(|| {
        AppServices::init()
            .or_else(|e| {
                tracing::error!(error = %e, "stored settings unusable, falling back to defaults");
                AppServices::fallback()
            })
            .map_err(|e| {
                tracing::error!(error = %e, "default settings unusable");
                humanize_error(&e).banner()
            })
    });
    match services {
        Ok(svc) => rsx! { Dashboard { svc: svc } },
        Err(message) => rsx! {
            div { style: "padding: 48px; font-family: system-ui, -apple-system, sans-serif;",
                h2 { "The dashboard could not start" }
                p { style: "color: #ff3b30;", "{message}" }
            }
        },
    }
}

/// Everything below the service container.
#[component]
fn Dashboard(svc: AppServices) -> Element {
    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(AppState::new(&svc)));

    // Keep the service indicator current for the whole session
    let monitor = svc.monitor();
    let _health = use_resource(move || {
        let monitor = monitor.clone();
        async move {
            let mut rx = monitor.subscribe();
            while rx.changed().await.is_ok() {
                let health = rx.borrow_and_update().clone();
                state.write().service_health = health;
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Sidebar layout for every signed-in page.
///
/// Nothing below the sidebar renders until the backend has confirmed the
/// session; a missing or rejected session goes back to the login page.
#[component]
fn DashboardLayout() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut verified = use_signal(|| false);

    let session = svc.session();
    let monitor = svc.monitor();
    let _gate = use_resource(move || {
        let session = session.clone();
        let monitor = monitor.clone();
        async move {
            if session.decide(RouteKind::Protected) == RouteDecision::RedirectToLogin {
                nav.replace(Route::Login {});
                return;
            }
            if session.verify().await {
                verified.set(true);
                monitor.start();
            } else {
                nav.replace(Route::Login {});
            }
        }
    });

    if !verified() {
        return rsx! {
            div { style: "display: flex; align-items: center; justify-content: center; height: 100vh; color: #888; font-family: system-ui, -apple-system, sans-serif;",
                "Checking session..."
            }
        };
    }

    let health = state.read().service_health.clone();

    rsx! {
        div { class: "app-container",
            style: "display: flex; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Sidebar
            nav { class: "sidebar",
                style: "width: 200px; display: flex; flex-direction: column; gap: 4px; padding: 16px 8px; border-right: 1px solid #e0e0e0; background: #fafafa;",
                h2 { style: "margin: 0 8px 16px; font-size: 18px;", "FIM Dashboard" }
                NavItem { to: Route::Analytics {}, label: "Analytics" }
                NavItem { to: Route::Log {}, label: "File Log" }
                NavItem { to: Route::Trash {}, label: "Trash" }
                NavItem { to: Route::WpAnalytics {}, label: "WP Analytics" }
                NavItem { to: Route::WpLog {}, label: "WP Log" }
                NavItem { to: Route::Settings {}, label: "Settings" }

                div { style: "flex: 1;" }

                ServiceIndicator { health: health }
                button {
                    style: "margin: 8px; padding: 8px; border-radius: 6px; border: 1px solid #ccc; background: white; cursor: pointer;",
                    onclick: {
                        let session = svc.session();
                        let monitor = svc.monitor();
                        move |_| {
                            let session = session.clone();
                            monitor.stop();
                            spawn(async move {
                                if let Err(e) = session.logout().await {
                                    tracing::warn!(error = %e, "logout request failed");
                                }
                                nav.replace(Route::Login {});
                            });
                        }
                    },
                    "Log out"
                }
            }

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px 24px;",
                if let Some(notice) = state.read().notice.clone() {
                    div {
                        style: "display: flex; justify-content: space-between; padding: 10px 14px; margin-bottom: 12px; border-radius: 8px; background: {notice_bg(notice.kind)};",
                        span { "{notice.text}" }
                        button {
                            style: "border: none; background: transparent; cursor: pointer;",
                            onclick: move |_| state.write().notice = None,
                            "\u{2715}"
                        }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "padding: 8px 12px; border-radius: 6px; text-decoration: none; color: #333;",
            active_class: "active",
            "{label}"
        }
    }
}

#[component]
fn ServiceIndicator(health: ServiceHealth) -> Element {
    let color = match health {
        ServiceHealth::Running => "#34c759",
        ServiceHealth::Stopped(_) => "#ff3b30",
        ServiceHealth::Unreachable(_) => "#ff9500",
        ServiceHealth::Unknown => "#aaa",
    };
    let label = health.label();
    let detail = match &health {
        ServiceHealth::Stopped(Some(d)) | ServiceHealth::Unreachable(d) => d.clone(),
        _ => String::new(),
    };
    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px; padding: 8px 12px; font-size: 13px; color: #555;",
            title: "{detail}",
            span { style: "width: 10px; height: 10px; border-radius: 50%; background: {color};" }
            "incron: {label}"
        }
    }
}

fn notice_bg(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "#d4edda",
        NoticeKind::Error => "#f8d7da",
    }
}
