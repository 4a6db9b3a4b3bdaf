// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting helpers for tick labels and tooltips.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using a decimal precision derived from the tick step.
///
/// A fractional step of `0.25` yields two decimals, `0.5` yields one, and any
/// step of `1.0` or more yields none, so labels along one axis line up
/// consistently.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let mut decimals = 0;
    if step > 0.0 && step < 1.0 {
        // Smallest precision that represents the step exactly, capped at 6.
        let mut s = step;
        while decimals < 6 && (s - s.round()).abs() > 1e-9 {
            s *= 10.0;
            decimals += 1;
        }
    }
    alloc::format!("{v:.decimals$}")
}

/// Formats a temperature or variance value with two decimals and a unit,
/// e.g. `7.50°C`.
pub fn format_celsius(v: f64) -> String {
    alloc::format!("{v:.2}\u{b0}C")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn step_controls_decimals() {
        assert_eq!(format_tick_with_step(3.0, 1.0), "3");
        assert_eq!(format_tick_with_step(3.5, 0.5), "3.5");
        assert_eq!(format_tick_with_step(3.25, 0.25), "3.25");
        assert_eq!(format_tick_with_step(3.0, 0.0), "3");
    }

    #[test]
    fn celsius_always_carries_two_decimals() {
        assert_eq!(format_celsius(7.5), "7.50\u{b0}C");
        assert_eq!(format_celsius(-0.5), "-0.50\u{b0}C");
        assert_eq!(format_celsius(8.663), "8.66\u{b0}C");
    }
}
