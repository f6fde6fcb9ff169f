// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Modal yes/no prompt in front of irreversible actions.

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    prompt: String,
    confirm_label: &'static str,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.35); z-index: 10;",
            div { style: "width: 380px; padding: 20px; border-radius: 12px; background: white; box-shadow: 0 8px 24px rgba(0,0,0,0.2);",
                p { style: "margin: 0 0 20px; font-size: 15px;", "{prompt}" }
                div { style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        style: "padding: 6px 14px; border-radius: 6px; border: 1px solid #ccc; background: white; cursor: pointer;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "padding: 6px 14px; border-radius: 6px; border: none; background: #ff3b30; color: white; cursor: pointer;",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
