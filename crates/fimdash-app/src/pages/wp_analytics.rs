// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// WordPress analytics: login / content / plugin trend, the day report
// (summary cards plus events by category, picked from the chart or the
// calendar) and the 30-day top lists.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use fimdash_core::calendar::pickable_dates;
use fimdash_core::human_errors::humanize_error;
use fimdash_core::{TREND_DAY_OPTIONS, Tone, WpTrendPoint};

use crate::components::report::{
    DayPicker, DayReport, ReportDatePicker, ReportError, ReportHeader, StatCard, TopList,
    WpEventTable, day_report,
};
use crate::components::trend_chart::{ChartSeries, TrendChart};
use crate::services::app_services::AppServices;
use crate::state::AppState;

fn series(trend: &[WpTrendPoint]) -> Vec<ChartSeries> {
    let pick = |f: fn(&WpTrendPoint) -> u64| -> Vec<(NaiveDate, u64)> {
        trend.iter().map(|p| (p.date, f(p))).collect()
    };
    vec![
        ChartSeries {
            label: "Login success",
            color: "#22c55e",
            points: pick(|p| p.login_success),
        },
        ChartSeries {
            label: "Login failed",
            color: "#ef4444",
            points: pick(|p| p.login_fail),
        },
        ChartSeries {
            label: "Content",
            color: "#3b82f6",
            points: pick(|p| p.content),
        },
        ChartSeries {
            label: "Plugin",
            color: "#f59e0b",
            points: pick(|p| p.plugin),
        },
    ]
}

#[component]
pub fn WpAnalytics() -> Element {
    let svc = use_context::<AppServices>();
    let state = use_context::<Signal<AppState>>();
    let mut days = use_signal(|| state.read().config.trend_days);
    let mut picked = use_signal(|| Option::<NaiveDate>::None);

    let api = svc.api().clone();
    let overview = use_resource(move || {
        let api = api.clone();
        let days = days();
        async move {
            tokio::try_join!(api.wp_analytics(days), api.wp_today_logs()).map_err(|e| {
                tracing::error!(error = %e, days, "loading WordPress analytics failed");
                humanize_error(&e).banner()
            })
        }
    });

    let api = svc.api().clone();
    let report = use_resource(move || {
        let api = api.clone();
        let date = picked();
        async move {
            let date = date?;
            let result = tokio::try_join!(api.wp_stats_by_date(date), api.wp_logs_by_date(date))
                .map_err(|e| {
                    tracing::warn!(error = %e, %date, "loading WordPress day report failed");
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
            h1 { "WordPress Analytics" }
            p { style: "color: #888; text-align: center; margin: 48px 0;", "Loading..." }
        };
    };
    let (analytics, today_logs) = match overview_value {
        Ok(data) => data,
        Err(message) => {
            return rsx! {
                h1 { "WordPress Analytics" }
                ReportError { message: message }
            };
        }
    };

    let picked_date = picked();
    let loaded = report.read().clone();
    let (report_ready, report_error) = match day_report(picked_date, loaded.as_ref()) {
        DayReport::Today => (Some((analytics.summary_today, today_logs.clone())), None),
        DayReport::Ready(day) => (Some(day), None),
        DayReport::Failed(message) => (None, Some(message)),
        DayReport::Loading => (None, None),
    };
    let report_pending = report_ready.is_none() && report_error.is_none();
    let allowed = pickable_dates(
        analytics.trend_analysis.iter().map(|p| p.date),
        Local::now().date_naive(),
    );
    let chart = series(&analytics.trend_analysis);
    let selected_days = days();

    rsx! {
        div {
            h1 { "WordPress Analytics" }

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

            if let Some((summary, logs)) = report_ready {
                div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
                    StatCard { label: "Successful logins", value: summary.login_success, tone: Tone::Positive }
                    StatCard { label: "Failed logins", value: summary.login_fail, tone: Tone::Negative }
                    StatCard { label: "Content activity", value: summary.content_activity, tone: Tone::Info }
                    StatCard { label: "Plugin activity", value: summary.plugin_activity, tone: Tone::Warning }
                }

                WpEventTable { title: "Login activity", entries: logs.login.clone() }
                WpEventTable { title: "Plugin activity", entries: logs.plugin.clone() }
                WpEventTable { title: "Content activity", entries: logs.content.clone() }
                WpEventTable { title: "User management", entries: logs.user_management.clone() }
                WpEventTable { title: "Other", entries: logs.lainnya.clone() }
            } else if report_pending {
                p { style: "color: #888; font-size: 13px;", "Loading report..." }
            }

            h2 { style: "font-size: 16px; margin: 28px 0 10px;",
                "Top activity "
                span { style: "color: #888; font-size: 13px; font-weight: normal;", "(last 30 days)" }
            }
            div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
                TopList { title: "Most active users", rows: analytics.top_5_users.clone() }
                TopList { title: "Most active IP addresses", rows: analytics.top_5_ips.clone() }
                TopList { title: "Failed login IPs", rows: analytics.top_5_failed_ips.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_series_per_activity_kind() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let trend = vec![WpTrendPoint {
            date,
            login_success: 5,
            login_fail: 2,
            content: 1,
            plugin: 0,
        }];
        let s = series(&trend);
        let labels: Vec<&str> = s.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Login success", "Login failed", "Content", "Plugin"]);
        assert_eq!(s[1].points, vec![(date, 2)]);
        assert_eq!(s[3].points, vec![(date, 0)]);
    }
}
