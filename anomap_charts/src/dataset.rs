// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The monthly land-surface temperature dataset.
//!
//! This mirrors the wire shape of the public `global-temperature.json`
//! document: a base temperature plus an ordered sequence of monthly variance
//! observations. The dataset is read-only after load; derived values (month
//! instants, month labels, absolute temperatures) are computed functionally
//! rather than written back into the records.

extern crate alloc;

use alloc::vec::Vec;

use crate::calendar;

/// A single monthly observation: a deviation from the base temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1..=12. Assumed, not validated: an out-of-range month
    /// places a cell incorrectly rather than producing an error.
    pub month: u32,
    /// Deviation from the dataset's base temperature, in degrees Celsius.
    pub variance: f64,
}

impl Observation {
    /// The month-resolution instant used for x-axis placement.
    pub fn instant(&self) -> f64 {
        calendar::month_instant(self.year, self.month)
    }

    /// The zero-based month index carried on the rendered cell.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// The month-name label used for y-axis placement.
    pub fn month_label(&self) -> &'static str {
        calendar::month_name(self.month)
    }

    /// The absolute temperature given the dataset's base temperature.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The full dataset as fetched: a reference temperature and monthly variances.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Dataset {
    /// Reference temperature in degrees Celsius.
    pub base_temperature: f64,
    /// Ordered monthly observations. Assumed (not enforced) to be contiguous
    /// monthly samples across a year range; cell width is derived from
    /// `len() / 12`.
    pub monthly_variance: Vec<Observation>,
}

impl Dataset {
    /// Returns the `(min, max)` month instants across all observations, or
    /// `None` for an empty dataset (the degenerate blank-chart case).
    pub fn instant_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for obs in &self.monthly_variance {
            let t = obs.instant();
            if !t.is_finite() {
                continue;
            }
            min = min.min(t);
            max = max.max(t);
        }
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn derived_fields_are_computed_not_stored() {
        let obs = Observation {
            year: 1900,
            month: 1,
            variance: -0.5,
        };
        assert_eq!(obs.instant(), 1900.0 * 12.0);
        assert_eq!(obs.month_index(), 0);
        assert_eq!(obs.month_label(), "January");
        assert_eq!(obs.temperature(8.0), 7.5);
    }

    #[test]
    fn extent_spans_first_and_last_observation() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                Observation {
                    year: 1753,
                    month: 1,
                    variance: -1.366,
                },
                Observation {
                    year: 1753,
                    month: 2,
                    variance: -2.223,
                },
                Observation {
                    year: 2015,
                    month: 9,
                    variance: 0.625,
                },
            ],
        };
        let (min, max) = dataset.instant_extent().expect("non-empty extent");
        assert_eq!(min, calendar::month_instant(1753, 1));
        assert_eq!(max, calendar::month_instant(2015, 9));
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        assert_eq!(dataset.instant_extent(), None);
    }
}
