// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Table footer with page buttons.

use dioxus::prelude::*;

use fimdash_core::pagination::{
    PageItem, clamp_page, compute_window, next_page, prev_page, should_paginate,
};

/// Renders nothing for a single page.
#[component]
pub fn Pagination(current: u32, total: u32, on_page: EventHandler<u32>) -> Element {
    if !should_paginate(total) {
        return rsx! {};
    }
    let current = clamp_page(current, total);
    let prev = prev_page(current);
    let next = next_page(current, total);
    let window = compute_window(current, total);

    rsx! {
        nav { class: "pagination",
            style: "display: flex; justify-content: center; align-items: center; gap: 4px; margin: 16px 0;",
            button {
                style: "{ARROW_STYLE}",
                disabled: prev.is_none(),
                onclick: move |_| {
                    if let Some(p) = prev {
                        on_page.call(p);
                    }
                },
                "\u{2039}"
            }
            for (i, item) in window.into_iter().enumerate() {
                {
                    match item {
                        PageItem::Page(n) => {
                            let (bg, fg) = if n == current { ("#333", "white") } else { ("white", "#333") };
                            rsx! {
                                button {
                                    key: "{i}",
                                    style: "min-width: 32px; padding: 4px 8px; border-radius: 6px; border: 1px solid #ddd; background: {bg}; color: {fg}; cursor: pointer;",
                                    onclick: move |_| on_page.call(n),
                                    "{n}"
                                }
                            }
                        }
                        PageItem::Ellipsis => rsx! {
                            span { key: "{i}", style: "padding: 0 4px; color: #888;", "{item}" }
                        },
                    }
                }
            }
            button {
                style: "{ARROW_STYLE}",
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(p) = next {
                        on_page.call(p);
                    }
                },
                "\u{203a}"
            }
        }
    }
}

const ARROW_STYLE: &str =
    "padding: 4px 10px; border-radius: 6px; border: 1px solid #ddd; background: white; cursor: pointer;";
