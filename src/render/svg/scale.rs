//! Value-to-coordinate scales and tick selection.

use chrono::{Datelike, NaiveDate};

/// Maps a numeric domain onto a coordinate range. The range may be inverted
/// (SVG y grows downwards).
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < f64::EPSILON {
            return f64::midpoint(self.range.0, self.range.1);
        }
        let t = (value - self.domain.0) / span;
        t.mul_add(self.range.1 - self.range.0, self.range.0)
    }
}

/// Evenly spaced "nice" tick values covering `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    /// About `target` ticks at 1/2/2.5/5 × 10ⁿ spacing. The first and last tick
    /// enclose the data.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn nice(min: f64, max: f64, target: usize) -> Self {
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };

        let step = nice_step((max - min) / target.max(1) as f64);
        let start = (min / step).floor() * step;
        let count = ((max - start) / step).ceil() as usize;

        let values = (0..=count)
            .map(|i| start + step * i as f64)
            .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
            .collect();
        Self { values, step }
    }

    /// Domain spanned by the ticks.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => (0.0, 1.0),
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Month strides tried when labelling long date ranges.
const MONTH_STRIDES: [u32; 6] = [1, 2, 3, 4, 6, 12];
/// Day strides tried when labelling short date ranges.
const DAY_STRIDES: [u64; 5] = [1, 2, 7, 14, 28];

/// Date ticks between `first` and `last` with at most `max_ticks` labels.
///
/// Ranges over about three months tick on month starts (`Jan 2021`);
/// shorter ranges tick every few days (`03-14`).
#[must_use]
pub fn date_ticks(first: NaiveDate, last: NaiveDate, max_ticks: usize) -> Vec<(NaiveDate, String)> {
    let span = (last - first).num_days().max(0);
    if span > 90 {
        month_ticks(first, last, max_ticks)
    } else {
        day_ticks(first, last, max_ticks)
    }
}

fn month_ticks(first: NaiveDate, last: NaiveDate, max_ticks: usize) -> Vec<(NaiveDate, String)> {
    let month_starts: Vec<NaiveDate> = std::iter::successors(next_month_start(first, true), |d| {
        next_month_start(*d, false)
    })
    .take_while(|d| *d <= last)
    .collect();

    let stride = MONTH_STRIDES
        .iter()
        .copied()
        .find(|s| month_starts.len().div_ceil(*s as usize) <= max_ticks)
        .unwrap_or(12);

    month_starts
        .into_iter()
        .filter(|d| (d.month0() % stride) == 0 || stride == 1)
        .map(|d| (d, d.format("%b %Y").to_string()))
        .collect()
}

fn next_month_start(date: NaiveDate, inclusive: bool) -> Option<NaiveDate> {
    if inclusive && date.day() == 1 {
        return Some(date);
    }
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn day_ticks(first: NaiveDate, last: NaiveDate, max_ticks: usize) -> Vec<(NaiveDate, String)> {
    let span = (last - first).num_days().max(0) as u64;
    let stride = DAY_STRIDES
        .iter()
        .copied()
        .find(|s| (span / s + 1) as usize <= max_ticks)
        .unwrap_or(28);

    std::iter::successors(Some(first), |d| d.checked_add_days(chrono::Days::new(stride)))
        .take_while(|d| *d <= last)
        .map(|d| (d, d.format("%m-%d").to_string()))
        .collect()
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
