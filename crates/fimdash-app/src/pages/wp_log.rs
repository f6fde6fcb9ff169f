// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// WordPress activity log. Search is live; the category / user / IP filters
// are edited as a draft and only take effect on Apply.

use dioxus::prelude::*;

use fimdash_client::{ListController, ListSource};
use fimdash_core::{action_tone, category_tone};

use crate::components::list_view::{Badge, LoadStatusLine, SMALL_BUTTON, SearchBox, TD_STYLE, TH_STYLE, use_list};
use crate::components::pagination::Pagination;
use crate::services::app_services::AppServices;

const FILTER_FIELDS: [(&str, &str); 3] = [
    ("category", "Category"),
    ("user", "User"),
    ("ip", "IP address"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelButton {
    Apply,
    Reset,
}

/// Run a filter panel button. Both close the panel, so the new open state
/// is always `false`.
fn press_panel_button<S: ListSource>(ctl: &ListController<S>, button: PanelButton) -> bool {
    match button {
        PanelButton::Apply => ctl.apply_filters(),
        PanelButton::Reset => ctl.reset_filters(),
    }
    false
}

#[component]
pub fn WpLog() -> Element {
    let handle = use_list(AppServices::wp_log_controller);
    let ctl = handle.controller.clone();
    let list = handle.list;
    let mut show_filters = use_signal(|| false);

    let snapshot = list.read().clone();
    let active_filters = snapshot.query.filters.len();
    let filter_label = if active_filters > 0 {
        format!("Filters ({active_filters})")
    } else {
        "Filters".to_string()
    };
    let (current, total_pages, count) = snapshot
        .pagination
        .map(|p| (p.current_page, p.total_pages, p.count))
        .unwrap_or((snapshot.query.page, 0, 0));

    rsx! {
        div {
            h1 { "WordPress Activity" }

            div { style: "display: flex; gap: 8px; align-items: center; margin: 12px 0;",
                SearchBox {
                    value: snapshot.query.search.clone(),
                    placeholder: "Search activity...",
                    on_input: {
                        let ctl = ctl.clone();
                        move |text: String| ctl.set_search_text(text)
                    },
                }
                button {
                    style: "padding: 8px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; cursor: pointer;",
                    onclick: move |_| {
                        let open = *show_filters.read();
                        show_filters.set(!open);
                    },
                    "{filter_label}"
                }
            }

            if *show_filters.read() {
                div { style: "display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; padding: 12px; margin-bottom: 12px; background: #f8f9fa; border-radius: 8px;",
                    for (name, label) in FILTER_FIELDS {
                        {
                            let value = snapshot.draft_filters.get(name).cloned().unwrap_or_default();
                            rsx! {
                                label { key: "{name}", style: "display: flex; flex-direction: column; gap: 4px; font-size: 12px; color: #555;",
                                    "{label}"
                                    input {
                                        r#type: "text",
                                        style: "padding: 6px 10px; border: 1px solid #ccc; border-radius: 6px;",
                                        value: "{value}",
                                        oninput: {
                                            let ctl = ctl.clone();
                                            move |evt: FormEvent| ctl.set_filter(name, evt.value())
                                        },
                                    }
                                }
                            }
                        }
                    }
                    button {
                        style: "padding: 6px 14px; border-radius: 6px; border: none; background: #007aff; color: white; cursor: pointer;",
                        onclick: {
                            let ctl = ctl.clone();
                            move |_| show_filters.set(press_panel_button(&ctl, PanelButton::Apply))
                        },
                        "Apply"
                    }
                    button {
                        style: "{SMALL_BUTTON}",
                        onclick: {
                            let ctl = ctl.clone();
                            move |_| show_filters.set(press_panel_button(&ctl, PanelButton::Reset))
                        },
                        "Reset"
                    }
                }
            }

            LoadStatusLine {
                status: snapshot.status,
                error: snapshot.error.clone(),
                shown: snapshot.items.len(),
                total: count,
                empty_text: "No WordPress activity found.",
            }

            if !snapshot.items.is_empty() {
                table { style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: "{TH_STYLE}", "Date" }
                            th { style: "{TH_STYLE}", "Time" }
                            th { style: "{TH_STYLE}", "Category" }
                            th { style: "{TH_STYLE}", "Action" }
                            th { style: "{TH_STYLE}", "User" }
                            th { style: "{TH_STYLE}", "IP" }
                            th { style: "{TH_STYLE}", "Details" }
                        }
                    }
                    tbody {
                        for entry in snapshot.items.iter() {
                            {
                                let (date, time) = entry.date_and_time();
                                rsx! {
                                    tr { key: "{entry.id}",
                                        td { style: "{TD_STYLE}", "{date}" }
                                        td { style: "{TD_STYLE}", "{time}" }
                                        td { style: "{TD_STYLE}",
                                            Badge { tone: category_tone(&entry.category), text: entry.category.clone() }
                                        }
                                        td { style: "{TD_STYLE}",
                                            Badge { tone: action_tone(&entry.action), text: entry.action.clone() }
                                        }
                                        td { style: "{TD_STYLE}", "{entry.user}" }
                                        td { style: "{TD_STYLE} font-family: monospace;", "{entry.ip}" }
                                        td { style: "{TD_STYLE} color: #666;", "{entry.details}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                current: current,
                total: total_pages,
                on_page: {
                    let ctl = ctl.clone();
                    move |page: u32| {
                        ctl.set_page(page);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fimdash_core::DashboardConfig;

    use super::*;

    #[tokio::test]
    async fn panel_buttons_commit_and_close() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_config(dir.path().to_path_buf(), DashboardConfig::default())
            .unwrap();
        let ctl = svc.wp_log_controller();

        ctl.set_filter("user", "admin");
        assert!(!press_panel_button(&ctl, PanelButton::Apply));
        assert_eq!(ctl.snapshot().query.filter("user"), Some("admin"));

        ctl.set_filter("ip", "10.0.0.1");
        assert!(!press_panel_button(&ctl, PanelButton::Reset));
        let state = ctl.snapshot();
        assert!(state.query.filters.is_empty());
        assert!(state.draft_filters.is_empty());
    }
}
