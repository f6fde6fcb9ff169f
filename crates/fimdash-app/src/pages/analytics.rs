// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-change analytics: trend chart over the last N days, today's tag
// counts and events, and a per-day report picked from the chart or the
// calendar.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use fimdash_core::calendar::pickable_dates;
use fimdash_core::human_errors::humanize_error;
use fimdash_core::{HistoricalEntry, TREND_DAY_OPTIONS, TodayLogs, TodayStats, Tone};

use crate::components::report::{
    DayPicker, DayReport, LogTable, ReportDatePicker, ReportError, ReportHeader, StatCard,
    day_report,
};
use crate::components::trend_chart::{ChartSeries, TrendChart};
use crate::services::app_services::AppServices;
use crate::state::AppState;

/// Everything the page shows for the current range.
#[derive(Debug, Clone, PartialEq)]
struct Overview {
    today: TodayStats,
    history: Vec<HistoricalEntry>,
    logs: TodayLogs,
}

fn series(history: &[HistoricalEntry]) -> Vec<ChartSeries> {
    let pick = |f: fn(&HistoricalEntry) -> u64| -> Vec<(NaiveDate, u64)> {
        history.iter().map(|h| (h.tanggal, f(h))).collect()
    };
    vec![
        ChartSeries {
            label: "Normal",
            color: "#a3c3f8",
            points: pick(|h| h.detail.normal),
        },
        ChartSeries {
            label: "Suspicious",
            color: "#f0ce95",
            points: pick(|h| h.detail.mencurigakan),
        },
        ChartSeries {
            label: "Dangerous",
            color: "#f48c8c",
            points: pick(|h| h.detail.bahaya),
        },
    ]
}

#[component]
pub fn Analytics() -> Element {
    let svc = use_context::<AppServices>();
    let state = use_context::<Signal<AppState>>();
    let mut days = use_signal(|| state.read().config.trend_days);
    let mut picked = use_signal(|| Option::<NaiveDate>::None);

    let api = svc.api().clone();
    let overview = use_resource(move || {
        let api = api.clone();
        let days = days();
        async move {
            let (today, history, logs) =
                tokio::try_join!(api.today_stats(), api.history(days), api.today_logs())
                    .map_err(|e| {
                        tracing::error!(error = %e, days, "loading analytics failed");
                        humanize_error(&e).banner()
                    })?;
            Ok::<_, String>(Overview { today, history, logs })
        }
    });

    let api = svc.api().clone();
    let report = use_resource(move || {
        let api = api.clone();
        let date = picked();
        async move {
            let date = date?;
            let result = tokio::try_join!(api.stats_by_date(date), api.logs_by_date(date)).map_err(|e| {
                tracing::warn!(error = %e, %date, "loading day report failed");
                humanize_error(&e).banner()
            });
            Some((date, result))
        }
    });

    let on_select = move |date: NaiveDate| {
        if date == Local::now().date_naive() {
            picked.set(None);
        } else {
            picked.set(Some(date));
        }
    };

    let overview_value = overview.read().clone();
    let Some(overview_value) = overview_value else {
        return rsx! {
            h1 { "File Change Analytics" }
            p { style: "color: #888; text-align: center; margin: 48px 0;", "Loading..." }
        };
    };
    let data = match overview_value {
        Ok(data) => data,
        Err(message) => {
            return rsx! {
                h1 { "File Change Analytics" }
                ReportError { message: message }
            };
        }
    };

    let picked_date = picked();
    let today = || (data.today.clone(), data.logs.clone());
    let loaded = report.read().clone();
    let (report_ready, report_error) = match day_report(picked_date, loaded.as_ref()) {
        DayReport::Today => (Some(today()), None),
        DayReport::Ready(day) => (Some(day), None),
        DayReport::Failed(message) => (None, Some(message)),
        DayReport::Loading => (None, None),
    };
    let report_pending = report_ready.is_none() && report_error.is_none();
    let allowed = pickable_dates(data.history.iter().map(|h| h.tanggal), Local::now().date_naive());
    let chart = series(&data.history);
    let selected_days = days();

    rsx! {
        div {
            h1 { "File Change Analytics" }

            div { style: "display: flex; justify-content: space-between; align-items: center; margin: 12px 0;",
                h2 { style: "font-size: 16px; margin: 0;", "Trend" }
                DayPicker {
                    options: TREND_DAY_OPTIONS.to_vec(),
                    selected: selected_days,
                    on_pick: move |d: u32| days.set(d),
                }
            }
            TrendChart { series: chart, on_select: on_select }

            div { style: "display: flex; justify-content: space-between; align-items: center;",
                ReportHeader { picked: picked_date, on_clear: move |_| picked.set(None) }
                ReportDatePicker {
                    picked: picked_date,
                    allowed: allowed,
                    on_pick: on_select,
                    on_today: move |_| picked.set(None),
                }
            }
            if let Some(message) = report_error {
                ReportError { message: message }
            }

            if let Some((stats, logs)) = report_ready {
                div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
                    StatCard { label: "Total changes", value: stats.total_perubahan_hari_ini, tone: Tone::Neutral }
                    StatCard { label: "Normal", value: stats.detail.normal, tone: Tone::Info }
                    StatCard { label: "Suspicious", value: stats.detail.mencurigakan, tone: Tone::Warning }
                    StatCard { label: "Dangerous", value: stats.detail.bahaya, tone: Tone::Negative }
                }

                LogTable { title: format!("Dangerous ({})", logs.bahaya.len()), entries: logs.bahaya.clone() }
                LogTable { title: format!("Suspicious ({})", logs.mencurigakan.len()), entries: logs.mencurigakan.clone() }
                LogTable { title: format!("Normal ({})", logs.normal.len()), entries: logs.normal.clone() }
            } else if report_pending {
                p { style: "color: #888; font-size: 13px;", "Loading report..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fimdash_core::TagBreakdown;

    #[test]
    fn series_follow_history_order_per_tag() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        let history = vec![
            HistoricalEntry {
                tanggal: day(1),
                total_perubahan: 6,
                detail: TagBreakdown { normal: 3, mencurigakan: 2, bahaya: 1 },
            },
            HistoricalEntry {
                tanggal: day(2),
                total_perubahan: 4,
                detail: TagBreakdown { normal: 4, mencurigakan: 0, bahaya: 0 },
            },
        ];
        let s = series(&history);
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].points, vec![(day(1), 3), (day(2), 4)]);
        assert_eq!(s[1].points, vec![(day(1), 2), (day(2), 0)]);
        assert_eq!(s[2].points, vec![(day(1), 1), (day(2), 0)]);
    }
}
