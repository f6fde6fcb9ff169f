// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glue between a `ListController` and a table page: the hook that mirrors
// controller snapshots into signals, plus the small widgets every table
// page shows (search box, status dropdown, load status line, tag badge).

use dioxus::prelude::*;

use fimdash_client::{ListController, ListSource, ListState, LoadStatus};
use fimdash_core::pagination::range_summary;
use fimdash_core::{LogTag, Row, STATUS_FILTERS, SelectionSet, Tone};

use crate::services::app_services::AppServices;

/// A page's controller plus the signals its markup reads.
pub struct ListHandle<S: ListSource> {
    pub controller: ListController<S>,
    pub list: Signal<ListState<S::Row>>,
    pub selection: Signal<SelectionSet>,
}

impl<S: ListSource> Clone for ListHandle<S> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            list: self.list,
            selection: self.selection,
        }
    }
}

/// Create the page's controller once, fetch the first page, and keep
/// `list` in step with every published snapshot.
pub fn use_list<S: ListSource>(build: impl FnOnce(&AppServices) -> ListController<S>) -> ListHandle<S> {
    let svc = use_context::<AppServices>();
    let controller = use_hook(|| build(&svc));
    let mut list = use_signal(|| controller.snapshot());
    let mut selection = use_signal(|| SelectionSet::new(svc.config().selection_policy));

    let ctl = controller.clone();
    let _watcher = use_resource(move || {
        let ctl = ctl.clone();
        async move {
            let mut rx = ctl.subscribe();
            ctl.refresh();
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                if snapshot.status == LoadStatus::Loaded {
                    let ids: Vec<&str> = snapshot.items.iter().map(|row| row.id()).collect();
                    selection.write().observe_page(ids);
                }
                list.set(snapshot);
            }
        }
    });

    ListHandle {
        controller,
        list,
        selection,
    }
}

#[component]
pub fn SearchBox(value: String, placeholder: &'static str, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            style: "flex: 1; min-width: 200px; padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px;",
            placeholder: placeholder,
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value().to_string()),
        }
    }
}

/// Single-choice tag filter (log and trash views).
#[component]
pub fn StatusFilter(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            style: "padding: 8px; border: 1px solid #ccc; border-radius: 6px;",
            value: "{value}",
            onchange: move |evt| on_change.call(evt.value().to_string()),
            for (label, wire) in STATUS_FILTERS {
                option { key: "{wire}", value: wire, "{label}" }
            }
        }
    }
}

/// Loading / error / empty line, plus the result summary once loaded.
#[component]
pub fn LoadStatusLine(
    status: LoadStatus,
    error: Option<String>,
    shown: usize,
    total: u64,
    empty_text: &'static str,
) -> Element {
    match status {
        LoadStatus::Idle | LoadStatus::Loading if shown == 0 => rsx! {
            p { style: "color: #888; text-align: center; margin: 32px 0;", "Loading..." }
        },
        LoadStatus::Errored => {
            let message = error.unwrap_or_default();
            rsx! {
                p { style: "color: #ff3b30; text-align: center; margin: 32px 0;", "{message}" }
            }
        }
        LoadStatus::Loaded if shown == 0 => rsx! {
            p { style: "color: #aaa; text-align: center; margin: 32px 0;", "{empty_text}" }
        },
        _ => {
            let summary = range_summary(shown, total);
            rsx! {
                p { style: "color: #666; font-size: 13px; margin: 8px 0;", "{summary}" }
            }
        }
    }
}

#[component]
pub fn TagBadge(tag: Option<LogTag>) -> Element {
    let Some(tag) = tag else {
        return rsx! { span { style: "color: #bbb;", "-" } };
    };
    let tone = match tag {
        LogTag::Normal => Tone::Info,
        LogTag::Suspicious => Tone::Warning,
        LogTag::Dangerous => Tone::Negative,
        LogTag::Other(_) => Tone::Neutral,
    };
    rsx! {
        Badge { tone: tone, text: tag.label().to_string() }
    }
}

#[component]
pub fn Badge(tone: Tone, text: String) -> Element {
    let (bg, fg) = tone_colors(tone);
    rsx! {
        span { style: "font-size: 12px; padding: 2px 8px; border-radius: 4px; background: {bg}; color: {fg};",
            "{text}"
        }
    }
}

fn tone_colors(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Positive => ("#d4edda", "#155724"),
        Tone::Negative => ("#f8d7da", "#721c24"),
        Tone::Info => ("#dbe9ff", "#1d4ed8"),
        Tone::Warning => ("#fff3cd", "#856404"),
        Tone::Neutral => ("#e2e3e5", "#383d41"),
    }
}

pub const TH_STYLE: &str =
    "text-align: left; padding: 8px; border-bottom: 2px solid #e0e0e0; font-size: 13px; color: #555;";
pub const TD_STYLE: &str = "padding: 8px; border-bottom: 1px solid #f0f0f0; font-size: 13px;";
pub const SMALL_BUTTON: &str =
    "padding: 4px 10px; border-radius: 4px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;";
