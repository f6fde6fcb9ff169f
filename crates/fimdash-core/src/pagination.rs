// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagination window: which page buttons a table footer shows.
//
// Page 1 and the last page are always shown, plus a three-page window around
// the current page. Gaps between shown pages collapse into one ellipsis.

use std::fmt;

/// Small page counts are shown in full.
pub const FULL_RANGE_MAX: u32 = 5;

/// One button (or gap marker) in the pagination footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    /// Text shown on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Page(n) => n.to_string(),
            Self::Ellipsis => "\u{2026}".to_string(),
        }
    }

    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Compute the pagination window for `current_page` of `total_pages`.
///
/// `current_page` is expected in `1..=total_pages`; callers clamp it first.
/// The result is empty only when `total_pages` is 0.
pub fn compute_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= FULL_RANGE_MAX {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let (start, end) = if current_page <= 2 {
        (2, 3)
    } else if current_page >= total_pages - 1 {
        (total_pages - 2, total_pages - 1)
    } else {
        (current_page - 1, current_page + 1)
    };
    let start = start.max(2);
    let end = end.min(total_pages - 1);

    let mut pages = Vec::with_capacity(5);
    pages.push(1);
    pages.extend(start..=end);
    pages.push(total_pages);

    let mut window = Vec::with_capacity(pages.len() + 2);
    let mut last: Option<u32> = None;
    for page in pages {
        if let Some(prev) = last
            && page - prev > 1
        {
            window.push(PageItem::Ellipsis);
        }
        window.push(PageItem::Page(page));
        last = Some(page);
    }
    window
}

/// Whether a footer should be rendered at all.
pub fn should_paginate(total_pages: u32) -> bool {
    total_pages > 1
}

/// Clamp a requested page into `1..=total_pages` (with a floor of 1).
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Target of the "previous" arrow, `None` on the first page.
pub fn prev_page(current_page: u32) -> Option<u32> {
    (current_page > 1).then(|| current_page - 1)
}

/// Target of the "next" arrow, `None` on the last page.
pub fn next_page(current_page: u32, total_pages: u32) -> Option<u32> {
    (current_page < total_pages).then(|| current_page + 1)
}

/// The "showing N of M results" line under a table.
pub fn range_summary(shown: usize, total_count: u64) -> String {
    format!("Showing {shown} of {total_count} results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn numbers(window: &[PageItem]) -> Vec<u32> {
        window.iter().filter_map(PageItem::page).collect()
    }

    #[test]
    fn small_totals_show_full_range() {
        for total in 1..=FULL_RANGE_MAX {
            for current in 1..=total {
                let window = compute_window(current, total);
                assert_eq!(numbers(&window), (1..=total).collect::<Vec<_>>());
                assert!(!window.contains(&Ellipsis));
            }
        }
    }

    #[test]
    fn zero_pages_is_empty() {
        assert!(compute_window(1, 0).is_empty());
    }

    #[test]
    fn single_page_is_one_button() {
        assert_eq!(compute_window(1, 1), vec![Page(1)]);
        assert!(!should_paginate(1));
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            compute_window(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            compute_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            compute_window(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn third_page_has_no_leading_gap() {
        assert_eq!(
            compute_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn six_pages_near_end() {
        assert_eq!(
            compute_window(5, 6),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn large_totals_keep_structure() {
        for total in (FULL_RANGE_MAX + 1)..=40 {
            for current in 1..=total {
                let window = compute_window(current, total);
                assert_eq!(window.first(), Some(&Page(1)), "({current},{total})");
                assert_eq!(window.last(), Some(&Page(total)), "({current},{total})");
                assert!(numbers(&window).contains(&current), "({current},{total})");

                let nums = numbers(&window);
                assert!(nums.windows(2).all(|w| w[0] < w[1]));

                for pair in window.windows(2) {
                    assert!(!(pair[0] == Ellipsis && pair[1] == Ellipsis));
                }
                for triple in window.windows(3) {
                    if let [Page(a), Ellipsis, Page(b)] = triple {
                        assert!(b - a > 1, "ellipsis across gap of one in ({current},{total})");
                    }
                    if let [Page(a), Page(b), _] = triple {
                        assert_eq!(b - a, 1, "missing ellipsis in ({current},{total})");
                    }
                }
            }
        }
    }

    #[test]
    fn arrows_stop_at_edges() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(4), Some(3));
        assert_eq!(next_page(10, 10), None);
        assert_eq!(next_page(9, 10), Some(10));
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn ellipsis_label() {
        assert_eq!(Ellipsis.label(), "\u{2026}");
        assert_eq!(Page(7).to_string(), "7");
        assert_eq!(range_summary(10, 95), "Showing 10 of 95 results");
    }
}
