// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page: persistent dashboard configuration.

use dioxus::prelude::*;

use fimdash_core::SelectionPolicy;
use fimdash_core::human_errors::humanize_error;

use crate::services::app_services::AppServices;
use crate::state::AppState;

fn policy_value(policy: SelectionPolicy) -> &'static str {
    match policy {
        SelectionPolicy::Retain => "retain",
        SelectionPolicy::PruneToPage => "prune_to_page",
    }
}

fn policy_from_value(value: &str) -> Option<SelectionPolicy> {
    match value {
        "retain" => Some(SelectionPolicy::Retain),
        "prune_to_page" => Some(SelectionPolicy::PruneToPage),
        _ => None,
    }
}

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    // Edits stay local until saved so a rejected value never reaches the app.
    let mut draft = use_signal(|| state.read().config.clone());
    let mut save_msg = use_signal(|| Option::<(bool, String)>::None);

    let current = draft.read().clone();
    let data_dir = svc.data_dir().display().to_string();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Backend" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "API base URL" }
                    input {
                        r#type: "text",
                        style: "width: 320px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{current.api_base_url}",
                        onchange: move |evt| draft.write().api_base_url = evt.value().trim().to_string(),
                    }
                }
                NumberRow {
                    label: "Request timeout (seconds)",
                    value: current.request_timeout_secs,
                    on_change: move |v: u64| draft.write().request_timeout_secs = v,
                }
                p { style: "color: #888; font-size: 12px; margin: 6px 0 0;",
                    "Backend address and timeout changes apply after a restart."
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Lists" }
                NumberRow {
                    label: "Search delay (milliseconds)",
                    value: current.search_debounce_ms,
                    on_change: move |v: u64| draft.write().search_debounce_ms = v,
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Selection across pages" }
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: policy_value(current.selection_policy),
                        onchange: move |evt| {
                            if let Some(policy) = policy_from_value(&evt.value()) {
                                draft.write().selection_policy = policy;
                            }
                        },
                        option { value: "retain", "Keep selection when changing page" }
                        option { value: "prune_to_page", "Only the visible page" }
                    }
                }
                NumberRow {
                    label: "Default chart range (days)",
                    value: u64::from(current.trend_days),
                    on_change: move |v: u64| {
                        if let Ok(days) = u32::try_from(v) {
                            draft.write().trend_days = days;
                        }
                    },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "File watch service" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Status endpoint" }
                    input {
                        r#type: "text",
                        style: "width: 200px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{current.service_status_path}",
                        onchange: move |evt| draft.write().service_status_path = evt.value().trim().to_string(),
                    }
                }
                NumberRow {
                    label: "Status poll interval (seconds)",
                    value: current.status_poll_secs,
                    on_change: move |v: u64| draft.write().status_poll_secs = v,
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = draft.read().clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                state.write().config = config;
                                save_msg.set(Some((true, "Settings saved.".into())));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some((false, humanize_error(&e).banner())));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some((ok, msg)) = save_msg() {
                {
                    let color = if ok { "#34c759" } else { "#ff3b30" };
                    rsx! {
                        p { style: "color: {color}; font-size: 14px; text-align: center; margin-top: 8px;", "{msg}" }
                    }
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "FIM Dashboard v0.1.0"
                    br {}
                    "File integrity and WordPress activity monitor"
                    br {}
                    "Settings stored in {data_dir}"
                }
            }
        }
    }
}

#[component]
fn NumberRow(label: &'static str, value: u64, on_change: EventHandler<u64>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "number",
                min: "0",
                style: "width: 100px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(v) = evt.value().trim().parse::<u64>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_policy_options_round_trip() {
        for policy in [SelectionPolicy::Retain, SelectionPolicy::PruneToPage] {
            assert_eq!(policy_from_value(policy_value(policy)), Some(policy));
        }
        assert_eq!(policy_from_value("bogus"), None);
    }
}
