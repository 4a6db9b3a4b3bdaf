// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar tick generation and formatting helpers.
//!
//! This is intentionally small and `no_std`-friendly. It models time at
//! **month resolution**: an instant is `year * 12 + (month - 1)` as `f64`,
//! which is all the resolution the monthly dataset carries (the original
//! source pins every sample to the 1st of its month). It provides:
//! - "nice" tick steps in whole years for multi-century spans
//! - 4-digit year formatting for tick labels
//! - calendar month names for band-scale labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// English month names in calendar order, `January` first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the month name for a 1-based month number.
///
/// Out-of-range months wrap rather than panic; the dataset contract assumes
/// 1..=12 but does not enforce it, so a bad month misplaces instead of
/// erroring.
pub fn month_name(month: u32) -> &'static str {
    let index = (month.saturating_sub(1) % 12) as usize;
    MONTH_NAMES[index]
}

/// Combines a year and a 1-based month into a month-resolution instant.
pub fn month_instant(year: i32, month: u32) -> f64 {
    f64::from(year) * 12.0 + f64::from(month) - 1.0
}

/// Formats a month instant as its 4-digit year.
pub fn format_year(instant: f64) -> String {
    if !instant.is_finite() {
        return alloc::format!("{instant}");
    }
    let year = (instant / 12.0).floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "calendar years fit comfortably in i64"
    )]
    let year = year.clamp(i64::MIN as f64, i64::MAX as f64) as i64;
    alloc::format!("{year}")
}

/// Returns "nice-ish" tick instants for a month-instant domain.
///
/// Ticks land on January of years that are multiples of a nice year step
/// (1/2/5/10/20/50/... years), so a multi-century domain gets decade or
/// half-century labels the way a calendar axis is expected to.
pub fn nice_year_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let year_min = min / 12.0;
    let year_max = max / 12.0;
    let span = year_max - year_min;
    let step0 = span / count.max(1) as f64;
    let step = nice_year_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (year_min / step).floor() * step;
    let stop = (year_max / step).ceil() * step;
    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };

    (0..=n).map(|i| (start + step * i as f64) * 12.0).collect()
}

fn nice_year_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    if step <= 1.0 {
        return 1.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn instants_are_monotonic_across_year_boundaries() {
        assert!(month_instant(1900, 12) < month_instant(1901, 1));
        assert_eq!(month_instant(1901, 1) - month_instant(1900, 12), 1.0);
    }

    #[test]
    fn month_names_wrap_out_of_range_input() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "January");
        assert_eq!(month_name(0), "January");
    }

    #[test]
    fn year_ticks_choose_decade_steps_for_century_spans() {
        let ticks = nice_year_ticks(month_instant(1753, 1), month_instant(2015, 9), 10);
        assert!(ticks.len() >= 2);
        let step_years = (ticks[1] - ticks[0]) / 12.0;
        assert!(
            (20.0..=50.0).contains(&step_years),
            "unexpected step {step_years}"
        );
        // All ticks land on a January.
        for t in &ticks {
            assert_eq!(t % 12.0, 0.0, "tick {t} is not a January instant");
        }
    }

    #[test]
    fn format_year_is_the_4_digit_year() {
        assert_eq!(format_year(month_instant(1900, 1)), "1900");
        assert_eq!(format_year(month_instant(1900, 12)), "1900");
        assert_eq!(format_year(month_instant(2015, 6)), "2015");
    }
}
