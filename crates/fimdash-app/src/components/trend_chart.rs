// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SVG trend chart. Clicking anywhere on the plot selects the nearest day.

use chrono::NaiveDate;
use dioxus::prelude::*;

use fimdash_core::chart::{ChartLayout, MARGIN, available_dates, tick_label};

/// One coloured line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub points: Vec<(NaiveDate, u64)>,
}

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 350.0;

#[component]
pub fn TrendChart(series: Vec<ChartSeries>, on_select: EventHandler<NaiveDate>) -> Element {
    let dates = available_dates(
        series
            .iter()
            .flat_map(|s| s.points.iter().map(|(d, _)| *d))
            .collect(),
    );
    let max_value = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, v)| *v))
        .max()
        .unwrap_or(0);

    let Some(layout) = ChartLayout::new(WIDTH, HEIGHT, &dates, max_value) else {
        return rsx! {};
    };

    let ticks = layout.value.ticks();
    let drawn: Vec<(ChartSeries, String, String)> = series
        .iter()
        .map(|s| (s.clone(), layout.area_path(&s.points), layout.line_path(&s.points)))
        .collect();
    let transform = format!("translate({}, {})", MARGIN.left, MARGIN.top);
    let inner_w = layout.inner_width;
    let inner_h = layout.inner_height;
    let label_y = inner_h + 18.0;
    let click_dates = dates.clone();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                style: "cursor: pointer;",
                rect { x: "0", y: "0", width: "{WIDTH}", height: "{HEIGHT}", fill: "#ffffff", rx: "14" }
                g { transform: "{transform}",
                    // Grid rows and value labels
                    for tick in ticks {
                        {
                            let y = layout.value.y(tick);
                            rsx! {
                                line { x1: "0", y1: "{y}", x2: "{inner_w}", y2: "{y}", stroke: "#e0e0e0", stroke_dasharray: "2,5" }
                                text { x: "-6", y: "{y}", fill: "#888", font_size: "11", text_anchor: "end", dy: "0.33em", "{tick}" }
                            }
                        }
                    }
                    // Day labels
                    for date in dates.iter().copied() {
                        {
                            let x = layout.time.x(date);
                            let label = tick_label(date);
                            rsx! {
                                text { x: "{x}", y: "{label_y}", fill: "#888", font_size: "11", text_anchor: "middle", "{label}" }
                            }
                        }
                    }
                    for (s, area, outline) in drawn {
                        path { d: "{area}", fill: "{s.color}", fill_opacity: "0.12", stroke: "none" }
                        path { d: "{outline}", fill: "transparent", stroke: "{s.color}", stroke_width: "2.5" }
                    }
                    rect {
                        x: "0",
                        y: "0",
                        width: "{inner_w}",
                        height: "{inner_h}",
                        fill: "transparent",
                        onclick: move |evt| {
                            let x = evt.element_coordinates().x;
                            if let Some(date) = layout.nearest_date(&click_dates, x) {
                                on_select.call(date);
                            }
                        },
                    }
                }
            }
            div { style: "display: flex; gap: 16px; font-size: 13px; color: #555;",
                for s in series.iter() {
                    span { style: "display: flex; align-items: center; gap: 6px;",
                        span { style: "width: 12px; height: 3px; background: {s.color};" }
                        "{s.label}"
                    }
                }
            }
        }
    }
}
