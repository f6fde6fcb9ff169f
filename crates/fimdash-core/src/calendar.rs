// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Month calendar behind the report date picker. Only days present in the
// trend, plus today, can be picked.

use chrono::{Datelike, Months, NaiveDate};

use crate::chart::available_dates;

/// Days a report can be opened for: every trend day plus `today`, sorted.
pub fn pickable_dates(trend: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = trend.into_iter().collect();
    dates.push(today);
    available_dates(dates)
}

/// First day of the month containing `date`.
pub fn month_of(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from the one containing `month`.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let month = month_of(month);
    let shifted = if delta >= 0 {
        month.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        month.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(month)
}

/// Monday-first weeks of the month containing `month`. Slots outside the
/// month are `None`.
pub fn month_weeks(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = month_of(month);
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut day = Some(first);
    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[slot] = Some(d);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = d.succ_opt();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_is_always_pickable() {
        let trend = [date(2025, 6, 3), date(2025, 6, 1), date(2025, 6, 3)];
        let dates = pickable_dates(trend, date(2025, 6, 7));
        assert_eq!(dates, vec![date(2025, 6, 1), date(2025, 6, 3), date(2025, 6, 7)]);
        assert!(!dates.contains(&date(2025, 6, 2)));

        // Today already in the trend is listed once.
        let dates = pickable_dates([date(2025, 6, 7)], date(2025, 6, 7));
        assert_eq!(dates, vec![date(2025, 6, 7)]);

        assert_eq!(pickable_dates([], date(2025, 6, 7)), vec![date(2025, 6, 7)]);
    }

    #[test]
    fn month_grid_starts_on_monday() {
        // 1 June 2025 is a Sunday.
        let weeks = month_weeks(date(2025, 6, 18));
        assert_eq!(weeks.len(), 6);
        assert!(weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(weeks[0][6], Some(date(2025, 6, 1)));
        assert_eq!(weeks[1][0], Some(date(2025, 6, 2)));
        assert_eq!(weeks[5][0], Some(date(2025, 6, 30)));
        assert!(weeks[5][1..].iter().all(Option::is_none));
        let days = weeks.iter().flatten().flatten().count();
        assert_eq!(days, 30);
    }

    #[test]
    fn month_navigation_crosses_years() {
        assert_eq!(shift_month(date(2025, 1, 31), -1), date(2024, 12, 1));
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 1));
        assert_eq!(shift_month(date(2025, 3, 9), 0), date(2025, 3, 1));
    }
}
