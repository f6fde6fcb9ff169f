// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trend chart geometry.
//
// Maps (date, count) series onto an SVG canvas: a linear time axis, a value
// axis with 10% headroom rounded to a nice step, line and area paths, and the
// inverse lookup used when the operator clicks a day to drill into it.

use std::fmt::Write as _;

use chrono::NaiveDate;

/// Space reserved around the plot for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 20.0,
    right: 30.0,
    bottom: 40.0,
    left: 40.0,
};

/// Charts narrower than this are not drawn.
pub const MIN_WIDTH: f64 = 10.0;

/// Number of value-axis ticks aimed for.
const TICK_TARGET: f64 = 5.0;

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// Linear mapping from calendar days to x pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    width: f64,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, width: f64) -> Self {
        Self { start, end, width }
    }

    fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn x(&self, date: NaiveDate) -> f64 {
        let span = self.span_days();
        if span <= 0 {
            return self.width / 2.0;
        }
        let offset = (date - self.start).num_days() as f64;
        offset / span as f64 * self.width
    }

    /// Fractional day offset from the start of the domain at pixel `x`.
    pub fn invert(&self, x: f64) -> f64 {
        let span = self.span_days();
        if span <= 0 || self.width <= 0.0 {
            return 0.0;
        }
        x / self.width * span as f64
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }
}

/// Linear mapping from counts to y pixels (0 at the bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max: f64,
    step: f64,
    height: f64,
}

impl ValueScale {
    /// Domain `[0, max + 10%]` extended to a whole number of nice steps.
    pub fn new(max_value: u64, height: f64) -> Self {
        let padded = max_value as f64 * 1.1;
        if padded <= 0.0 {
            return Self {
                max: 1.0,
                step: 1.0,
                height,
            };
        }
        let step = nice_step(padded / TICK_TARGET);
        let max = (padded / step).ceil() * step;
        Self { max, step, height }
    }

    pub fn y(&self, value: f64) -> f64 {
        self.height - value / self.max * self.height
    }

    pub fn domain_max(&self) -> f64 {
        self.max
    }

    /// Tick values from 0 to the domain maximum inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

/// Round `raw` up to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).max(1.0)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Scales and inner size of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub time: TimeScale,
    pub value: ValueScale,
}

impl ChartLayout {
    /// `None` when there is nothing to draw or no room to draw it.
    pub fn new(width: f64, height: f64, dates: &[NaiveDate], max_value: u64) -> Option<Self> {
        if width < MIN_WIDTH {
            return None;
        }
        let start = *dates.iter().min()?;
        let end = *dates.iter().max()?;
        let inner_width = (width - MARGIN.left - MARGIN.right).max(0.0);
        let inner_height = (height - MARGIN.top - MARGIN.bottom).max(0.0);
        Some(Self {
            width,
            height,
            inner_width,
            inner_height,
            time: TimeScale::new(start, end, inner_width),
            value: ValueScale::new(max_value, inner_height),
        })
    }

    pub fn point(&self, date: NaiveDate, value: u64) -> (f64, f64) {
        (self.time.x(date), self.value.y(value as f64))
    }

    /// SVG path data of a polyline through `series`.
    pub fn line_path(&self, series: &[(NaiveDate, u64)]) -> String {
        let mut d = String::new();
        for (i, &(date, value)) in series.iter().enumerate() {
            let (x, y) = self.point(date, value);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.2},{y:.2}");
        }
        d
    }

    /// SVG path data of the area between `series` and the x axis.
    pub fn area_path(&self, series: &[(NaiveDate, u64)]) -> String {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return String::new();
        };
        let mut d = self.line_path(series);
        let base = self.value.y(0.0);
        let _ = write!(
            d,
            "L{:.2},{base:.2}L{:.2},{base:.2}Z",
            self.time.x(last.0),
            self.time.x(first.0)
        );
        d
    }

    /// Date of the data point closest to a click at plot-relative `x`.
    pub fn nearest_date(&self, dates: &[NaiveDate], x: f64) -> Option<NaiveDate> {
        let target = self.time.invert(x);
        let start = self.time.start();
        dates.iter().copied().min_by(|a, b| {
            let da = ((*a - start).num_days() as f64 - target).abs();
            let db = ((*b - start).num_days() as f64 - target).abs();
            da.total_cmp(&db)
        })
    }
}

/// Axis label for a date, `day/month`.
pub fn tick_label(date: NaiveDate) -> String {
    date.format("%-d/%-m").to_string()
}

/// Dates in a trend series, sorted and deduplicated.
pub fn available_dates(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    dates.sort_unstable();
    dates.dedup();
    dates
}
