// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Select-mode toggle and bulk action button above a table.

use dioxus::prelude::*;

#[component]
pub fn SelectionBar(
    active: bool,
    count: usize,
    bulk_label: &'static str,
    on_toggle_mode: EventHandler<()>,
    on_bulk: EventHandler<()>,
) -> Element {
    let mode_label = if active { "Cancel" } else { "Select" };
    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px;",
            button {
                style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px; cursor: pointer;",
                onclick: move |_| on_toggle_mode.call(()),
                "{mode_label}"
            }
            if active {
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: none; background: #ff3b30; color: white; font-size: 13px; cursor: pointer;",
                    disabled: count == 0,
                    onclick: move |_| on_bulk.call(()),
                    "{bulk_label} ({count})"
                }
            }
        }
    }
}
