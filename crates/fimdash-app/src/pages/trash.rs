// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trash page. Soft-deleted file-change events can be restored
// or deleted forever (single or bulk), and the whole trash emptied.

use dioxus::prelude::*;

use fimdash_core::{FILTER_ALL, TrashAction};

use crate::components::confirm::ConfirmDialog;
use crate::components::list_view::{
    LoadStatusLine, SMALL_BUTTON, SearchBox, StatusFilter, TD_STYLE, TH_STYLE, TagBadge, use_list,
};
use crate::components::pagination::Pagination;
use crate::components::selection_bar::SelectionBar;
use crate::services::app_services::AppServices;
use crate::state::{AppState, Notice};

#[component]
pub fn Trash() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();
    let handle = use_list(AppServices::trash_controller);
    let ctl = handle.controller.clone();
    let list = handle.list;
    let mut selection = handle.selection;
    let mut pending = use_signal(|| Option::<TrashAction>::None);

    let run = {
        let svc = svc.clone();
        let ctl = ctl.clone();
        move |action: TrashAction| {
            let svc = svc.clone();
            let ctl = ctl.clone();
            spawn(async move {
                let result = svc.run_trash_action(&action).await;
                if let Some(bulk) = action.bulk() {
                    selection.write().settle(bulk, result.is_ok());
                }
                match &result {
                    Ok(()) => state.write().notice = Some(Notice::success(action.success_message())),
                    Err(e) => {
                        tracing::error!(error = %e, "trash action failed");
                        state.write().notice = Some(Notice::error(e));
                    }
                }
                if result.is_ok() && action.resets_query() {
                    selection.write().exit_mode();
                    ctl.reset();
                } else {
                    ctl.refresh();
                }
            });
        }
    };
    let request = {
        let run = run.clone();
        move |action: TrashAction| {
            if action.requires_confirmation() {
                pending.set(Some(action));
            } else {
                run(action);
            }
        }
    };

    let snapshot = list.read().clone();
    let sel_active = selection.read().is_active();
    let sel_count = selection.read().count();
    let page_ids: Vec<String> = snapshot.items.iter().map(|e| e.id.clone()).collect();
    let all_checked = selection.read().covers(&page_ids);
    let status_value = snapshot
        .query
        .filter("status")
        .unwrap_or(FILTER_ALL)
        .to_string();
    let (current, total_pages, count) = snapshot
        .pagination
        .map(|p| (p.current_page, p.total_pages, p.count))
        .unwrap_or((snapshot.query.page, 0, 0));

    rsx! {
        div {
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { "Trash" }
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ff3b30; color: #ff3b30; background: white; font-size: 13px; cursor: pointer;",
                    disabled: count == 0,
                    onclick: {
                        let mut request = request.clone();
                        move |_| request(TrashAction::Empty)
                    },
                    "Empty trash"
                }
            }

            div { style: "display: flex; gap: 8px; align-items: center; margin: 12px 0; flex-wrap: wrap;",
                SearchBox {
                    value: snapshot.query.search.clone(),
                    placeholder: "Search trash...",
                    on_input: {
                        let ctl = ctl.clone();
                        move |text: String| ctl.set_search_text(text)
                    },
                }
                StatusFilter {
                    value: status_value,
                    on_change: {
                        let ctl = ctl.clone();
                        move |value: String| ctl.set_filter("status", value)
                    },
                }
                SelectionBar {
                    active: sel_active,
                    count: sel_count,
                    bulk_label: "Delete forever",
                    on_toggle_mode: move |_| selection.write().toggle_mode(),
                    on_bulk: {
                        let mut request = request.clone();
                        move |_| {
                            let ids = selection.read().ids();
                            request(TrashAction::DeleteSelected(ids));
                        }
                    },
                }
            }

            LoadStatusLine {
                status: snapshot.status,
                error: snapshot.error.clone(),
                shown: snapshot.items.len(),
                total: count,
                empty_text: "The trash is empty.",
            }

            if !snapshot.items.is_empty() {
                table { style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            if sel_active {
                                th { style: "{TH_STYLE}",
                                    input {
                                        r#type: "checkbox",
                                        checked: all_checked,
                                        onchange: {
                                            let page_ids = page_ids.clone();
                                            move |_| selection.write().select_all(&page_ids)
                                        },
                                    }
                                }
                            }
                            th { style: "{TH_STYLE}", "Date" }
                            th { style: "{TH_STYLE}", "Time" }
                            th { style: "{TH_STYLE}", "File" }
                            th { style: "{TH_STYLE}", "Path" }
                            th { style: "{TH_STYLE}", "Tag" }
                            th { style: "{TH_STYLE}", "" }
                        }
                    }
                    tbody {
                        for entry in snapshot.items.iter() {
                            {
                                let id = entry.id.clone();
                                let checked = selection.read().is_selected(&id);
                                rsx! {
                                    tr { key: "{id}",
                                        if sel_active {
                                            td { style: "{TD_STYLE}",
                                                input {
                                                    r#type: "checkbox",
                                                    checked: checked,
                                                    onchange: {
                                                        let id = id.clone();
                                                        move |_| selection.write().toggle(&id)
                                                    },
                                                }
                                            }
                                        }
                                        td { style: "{TD_STYLE}", "{entry.tanggal}" }
                                        td { style: "{TD_STYLE}", "{entry.jam}" }
                                        td { style: "{TD_STYLE}", "{entry.nama_file}" }
                                        td { style: "{TD_STYLE} color: #666; word-break: break-all;", "{entry.path_lengkap}" }
                                        td { style: "{TD_STYLE}", TagBadge { tag: entry.tag.clone() } }
                                        td { style: "{TD_STYLE} white-space: nowrap;",
                                            button {
                                                style: "{SMALL_BUTTON} margin-right: 4px;",
                                                onclick: {
                                                    let mut request = request.clone();
                                                    let id = id.clone();
                                                    move |_| request(TrashAction::Restore(id.clone()))
                                                },
                                                "Restore"
                                            }
                                            button {
                                                style: "{SMALL_BUTTON} color: #ff3b30;",
                                                onclick: {
                                                    let mut request = request.clone();
                                                    let id = id.clone();
                                                    move |_| request(TrashAction::Delete(id.clone()))
                                                },
                                                "Delete"
                                            }
                                        }
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

            if let Some(action) = pending.read().clone() {
                ConfirmDialog {
                    prompt: action.confirmation_prompt().unwrap_or_default(),
                    confirm_label: "Delete",
                    on_confirm: {
                        let run = run.clone();
                        move |_| {
                            if let Some(action) = pending.take() {
                                run(action);
                            }
                        }
                    },
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
