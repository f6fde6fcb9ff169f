// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Widgets shared by several pages.

pub mod confirm;
pub mod list_view;
pub mod pagination;
pub mod report;
pub mod selection_bar;
pub mod trend_chart;
