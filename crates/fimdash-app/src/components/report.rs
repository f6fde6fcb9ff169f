// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Building blocks of the two analytics pages: stat cards, the day-range
// picker, the report date picker and header, and read-only event tables.

use chrono::NaiveDate;
use dioxus::prelude::*;

use fimdash_core::calendar::{month_of, month_weeks, shift_month};
use fimdash_core::{LogEntry, Tone, WpLogEntry, action_tone};

use crate::components::list_view::{Badge, TD_STYLE, TH_STYLE};

#[component]
pub fn StatCard(label: &'static str, value: u64, tone: Tone) -> Element {
    let accent = match tone {
        Tone::Positive => "#34c759",
        Tone::Negative => "#ff3b30",
        Tone::Warning => "#ff9500",
        Tone::Info => "#007aff",
        Tone::Neutral => "#8e8e93",
    };
    rsx! {
        div { style: "flex: 1; min-width: 140px; padding: 14px 16px; border-radius: 10px; background: white; border: 1px solid #eee; border-left: 4px solid {accent};",
            div { style: "font-size: 12px; color: #888;", "{label}" }
            div { style: "font-size: 26px; font-weight: 600; margin-top: 4px;", "{value}" }
        }
    }
}

/// "Last N days" buttons above a trend chart.
#[component]
pub fn DayPicker(options: Vec<u32>, selected: u32, on_pick: EventHandler<u32>) -> Element {
    rsx! {
        div { style: "display: flex; gap: 6px;",
            for days in options {
                {
                    let (bg, fg) = if days == selected { ("#007aff", "white") } else { ("white", "#333") };
                    rsx! {
                        button {
                            key: "{days}",
                            style: "padding: 4px 12px; border-radius: 14px; border: 1px solid #ccc; background: {bg}; color: {fg}; font-size: 12px; cursor: pointer;",
                            onclick: move |_| on_pick.call(days),
                            "{days} days"
                        }
                    }
                }
            }
        }
    }
}

/// Title line of the report below the chart. With a picked date it offers
/// a way back to today's figures.
#[component]
pub fn ReportHeader(picked: Option<NaiveDate>, on_clear: EventHandler<()>) -> Element {
    match picked {
        None => rsx! {
            h2 { style: "font-size: 16px; margin: 20px 0 10px;", "Today" }
        },
        Some(date) => {
            let title = date.format("%-d %B %Y").to_string();
            rsx! {
                div { style: "display: flex; align-items: center; gap: 12px; margin: 20px 0 10px;",
                    h2 { style: "font-size: 16px; margin: 0;", "Report for {title}" }
                    button {
                        style: "padding: 4px 10px; border-radius: 4px; border: 1px solid #ccc; background: white; font-size: 12px; cursor: pointer;",
                        onclick: move |_| on_clear.call(()),
                        "Back to today"
                    }
                }
            }
        }
    }
}

/// File changes of one tag for the day being reported.
#[component]
pub fn LogTable(title: String, entries: Vec<LogEntry>) -> Element {
    rsx! {
        section { style: "margin-top: 16px;",
            h3 { style: "font-size: 14px; margin: 0 0 6px;", "{title}" }
            if entries.is_empty() {
                p { style: "color: #aaa; font-size: 13px;", "No entries." }
            } else {
                table { style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: "{TH_STYLE}", "Time" }
                            th { style: "{TH_STYLE}", "Method" }
                            th { style: "{TH_STYLE}", "File" }
                            th { style: "{TH_STYLE}", "Path" }
                        }
                    }
                    tbody {
                        for entry in entries.iter() {
                            tr { key: "{entry.id}",
                                td { style: "{TD_STYLE}", "{entry.jam}" }
                                td { style: "{TD_STYLE}", "{entry.metode}" }
                                td { style: "{TD_STYLE}", "{entry.nama_file}" }
                                td { style: "{TD_STYLE} color: #666; word-break: break-all;", "{entry.path_lengkap}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// WordPress events of one category for the day being reported, newest
/// first. Categories with no events are left out entirely.
#[component]
pub fn WpEventTable(title: &'static str, entries: Vec<WpLogEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }
    let count = entries.len();
    rsx! {
        section { style: "margin-top: 16px;",
            h3 { style: "font-size: 14px; margin: 0 0 6px;", "{title} ({count})" }
            table { style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "{TH_STYLE}", "Time" }
                        th { style: "{TH_STYLE}", "User" }
                        th { style: "{TH_STYLE}", "IP" }
                        th { style: "{TH_STYLE}", "Action" }
                        th { style: "{TH_STYLE}", "Details" }
                    }
                }
                tbody {
                    for entry in entries.iter().rev() {
                        {
                            let (_, time) = entry.date_and_time();
                            rsx! {
                                tr { key: "{entry.id}",
                                    td { style: "{TD_STYLE} color: #666;", "{time}" }
                                    td { style: "{TD_STYLE} font-family: monospace;", "{entry.user}" }
                                    td { style: "{TD_STYLE} font-family: monospace;", "{entry.ip}" }
                                    td { style: "{TD_STYLE}",
                                        Badge { tone: action_tone(&entry.action), text: entry.action.clone() }
                                    }
                                    td { style: "{TD_STYLE} color: #666; word-break: break-all;", "{entry.details}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ranked (name, count) list such as the five busiest users.
#[component]
pub fn TopList(title: &'static str, rows: Vec<(String, u64)>) -> Element {
    rsx! {
        div { style: "flex: 1; min-width: 200px; padding: 12px 16px; border-radius: 10px; background: white; border: 1px solid #eee;",
            h3 { style: "font-size: 14px; margin: 0 0 8px;", "{title}" }
            if rows.is_empty() {
                p { style: "color: #aaa; font-size: 13px; margin: 0;", "Nothing recorded." }
            }
            for (rank, (name, count)) in rows.iter().enumerate() {
                {
                    let position = rank + 1;
                    rsx! {
                        div { key: "{name}", style: "display: flex; justify-content: space-between; font-size: 13px; padding: 3px 0;",
                            span { "{position}. {name}" }
                            span { style: "color: #666;", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

/// Inline failure line for a report section.
#[component]
pub fn ReportError(message: String) -> Element {
    rsx! {
        p { style: "color: #ff3b30; margin: 16px 0;", "{message}" }
    }
}

/// A day report as loaded by a page resource, tagged with its date.
pub type LoadedReport<T> = Option<(NaiveDate, Result<T, String>)>;

/// What the report area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DayReport<T> {
    /// No day picked: today's figures.
    Today,
    /// The picked day has not answered yet.
    Loading,
    Ready(T),
    Failed(String),
}

/// Match a loaded report against the picked day. A result for any other
/// day is still in flight as far as the page is concerned.
pub fn day_report<T: Clone>(picked: Option<NaiveDate>, loaded: Option<&LoadedReport<T>>) -> DayReport<T> {
    let Some(picked) = picked else {
        return DayReport::Today;
    };
    match loaded {
        Some(Some((date, Ok(report)))) if *date == picked => DayReport::Ready(report.clone()),
        Some(Some((date, Err(message)))) if *date == picked => DayReport::Failed(message.clone()),
        _ => DayReport::Loading,
    }
}

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Calendar button for the report day. Only `allowed` days can be clicked;
/// the footer returns to today.
#[component]
pub fn ReportDatePicker(
    picked: Option<NaiveDate>,
    allowed: Vec<NaiveDate>,
    on_pick: EventHandler<NaiveDate>,
    on_today: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);
    let latest = allowed.last().copied();
    let mut month = use_signal(move || picked.or(latest).map(month_of));

    let label = match picked {
        None => "Today".to_string(),
        Some(date) => date.format("%d %B %Y").to_string(),
    };

    rsx! {
        div { style: "position: relative;",
            button {
                style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px; cursor: pointer;",
                onclick: move |_| {
                    let was_open = open();
                    if !was_open {
                        month.set(picked.or(latest).map(month_of));
                    }
                    open.set(!was_open);
                },
                "\u{1F4C5} {label}"
            }
            if open() {
                if let Some(shown) = month() {
                    {
                        let title = shown.format("%B %Y").to_string();
                        let weeks = month_weeks(shown);
                        rsx! {
                            div { style: "position: absolute; right: 0; z-index: 10; margin-top: 6px; padding: 10px 14px; border-radius: 10px; background: #222; color: #eee; box-shadow: 0 4px 16px rgba(0,0,0,0.25);",
                                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                                    button {
                                        style: "border: none; background: transparent; color: #eee; cursor: pointer;",
                                        onclick: move |_| month.set(Some(shift_month(shown, -1))),
                                        "\u{2039}"
                                    }
                                    span { style: "font-size: 14px;", "{title}" }
                                    button {
                                        style: "border: none; background: transparent; color: #eee; cursor: pointer;",
                                        onclick: move |_| month.set(Some(shift_month(shown, 1))),
                                        "\u{203A}"
                                    }
                                }
                                table { style: "border-collapse: collapse;",
                                    thead {
                                        tr {
                                            for name in WEEKDAYS {
                                                th { style: "width: 32px; font-size: 11px; color: #999; font-weight: normal;", "{name}" }
                                            }
                                        }
                                    }
                                    tbody {
                                        for week in weeks {
                                            tr {
                                                for slot in week {
                                                    td { style: "width: 32px; height: 30px; text-align: center;",
                                                        if let Some(day) = slot {
                                                            {
                                                                let enabled = allowed.contains(&day);
                                                                let bg = if Some(day) == picked { "#5b8def" } else { "transparent" };
                                                                let fg = if enabled { "#eee" } else { "#555" };
                                                                let number = day.format("%-d").to_string();
                                                                rsx! {
                                                                    button {
                                                                        style: "width: 28px; height: 28px; border-radius: 6px; border: none; background: {bg}; color: {fg}; font-size: 13px;",
                                                                        disabled: !enabled,
                                                                        onclick: move |_| {
                                                                            open.set(false);
                                                                            on_pick.call(day);
                                                                        },
                                                                        "{number}"
                                                                    }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                button {
                                    style: "width: 100%; margin-top: 6px; padding: 6px; border: none; background: transparent; color: #eee; font-size: 13px; cursor: pointer;",
                                    onclick: move |_| {
                                        open.set(false);
                                        on_today.call(());
                                    },
                                    "Back to today"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn report_for_another_day_counts_as_loading() {
        let loaded: LoadedReport<u32> = Some((day(3), Ok(3)));
        assert_eq!(day_report(None, Some(&loaded)), DayReport::Today);
        assert_eq!(day_report(Some(day(3)), Some(&loaded)), DayReport::Ready(3));
        assert_eq!(day_report(Some(day(4)), Some(&loaded)), DayReport::Loading);
        assert_eq!(day_report::<u32>(Some(day(4)), None), DayReport::Loading);
        assert_eq!(day_report::<u32>(Some(day(4)), Some(&None)), DayReport::Loading);
    }

    #[test]
    fn failure_belongs_to_its_day() {
        let loaded: LoadedReport<u32> = Some((day(3), Err("Server error".into())));
        assert_eq!(
            day_report(Some(day(3)), Some(&loaded)),
            DayReport::Failed("Server error".into())
        );
        assert_eq!(day_report(Some(day(5)), Some(&loaded)), DayReport::Loading);
    }
}
