// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! These types provide the coordinate mapping behavior the heatmap needs:
//! a continuous time scale for the year axis, a band scale for the twelve
//! month rows, a linear scale for the legend axis, and an ordinal color
//! scale over raw variance values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use hashbrown::HashMap;
use peniko::Color;

use crate::calendar;

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous time scale over month instants.
    Time(ScaleTimeSpec),
    /// Discrete band scale over labels.
    Band(ScaleBandSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleTimeSpec> for ScaleSpec {
    fn from(value: ScaleTimeSpec) -> Self {
        Self::Time(value)
    }
}

impl From<ScaleBandSpec> for ScaleSpec {
    fn from(value: ScaleBandSpec) -> Self {
        Self::Band(value)
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Time scale.
    Time(ScaleTime),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Time(s) => s.map(x),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => s.ticks(count),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns "nice-ish" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(first), Some(last)) if ticks.len() >= 2 => (*first, *last),
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
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
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

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
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
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

/// A time scale over month-resolution instants.
///
/// This is a linear scale whose ticks land on "nice" calendar years; see
/// [`calendar::nice_year_ticks`].
#[derive(Clone, Copy, Debug)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

/// Specification for a time scale (domain in month instants, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleTimeSpec {
    /// Domain in month instants (`year * 12 + month - 1`).
    pub domain: (f64, f64),
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a month instant into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Returns "nice-ish" tick instants for the time domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        calendar::nice_year_ticks(self.inner.domain_min(), self.inner.domain_max(), count)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.inner.domain_min()
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.inner.domain_max()
    }
}

impl ScaleTimeSpec {
    /// Creates a new time scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleTime {
        ScaleTime::new(self.domain, range)
    }
}

/// A discrete band scale over labels.
///
/// Bands are laid out from the start of the range in label order, so a
/// top-to-bottom range puts the first label in the top band. Padding defaults
/// to zero: heatmap cells touch.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    labels: Vec<String>,
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (labels + padding, no range yet).
#[derive(Clone, Debug)]
pub struct ScaleBandSpec {
    /// Band labels in display order.
    pub labels: Vec<String>,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `labels` over `range`.
    pub fn new(range: (f64, f64), labels: Vec<String>) -> Self {
        Self {
            range,
            labels,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.labels.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the label for a band at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the start position for a band at `index`.
    pub fn position_of_index(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the start position for the band with the given label, or
    /// `None` if the label is not in the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        let index = self.labels.iter().position(|l| l == label)?;
        Some(self.position_of_index(index))
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with zero padding.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Builds a spec whose domain is each distinct label in first-seen order.
    ///
    /// This is the literal y-domain contract of the heatmap: insertion order
    /// from the input sequence, not sorted calendar order.
    pub fn from_labels_first_seen<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            if !out.iter().any(|l| l == label) {
                out.push(String::from(label));
            }
        }
        Self::new(out)
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.labels.clone())
            .with_padding(self.padding_inner, self.padding_outer)
    }
}

/// An ordinal color scale over raw `f64` values.
///
/// Each distinct value is assigned the next palette entry in first-seen
/// order, cycling once the palette is exhausted. Values are distinguished by
/// bit pattern, so every observed variance is its own category; this is the
/// chart's documented (coarse) color contract, kept deliberately instead of a
/// binned or continuous gradient.
#[derive(Clone, Debug)]
pub struct ScaleOrdinal {
    palette: Vec<Color>,
    domain: Vec<f64>,
    index: HashMap<u64, usize>,
}

impl ScaleOrdinal {
    /// Creates an ordinal scale over the given palette.
    ///
    /// An empty palette is replaced by a single black entry so `scale` stays
    /// total.
    pub fn new(palette: impl Into<Vec<Color>>) -> Self {
        let mut palette = palette.into();
        if palette.is_empty() {
            palette.push(Color::BLACK);
        }
        Self {
            palette,
            domain: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Maps a value to its palette color, extending the domain on first sight.
    pub fn scale(&mut self, value: f64) -> Color {
        let next = self.domain.len();
        let index = *self.index.entry(value.to_bits()).or_insert_with(|| {
            self.domain.push(value);
            next
        });
        self.palette[index % self.palette.len()]
    }

    /// Returns the color for a value already in the domain.
    pub fn get(&self, value: f64) -> Option<Color> {
        let index = *self.index.get(&value.to_bits())?;
        Some(self.palette[index % self.palette.len()])
    }

    /// The distinct values seen so far, in first-seen order.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// The palette in use.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::palette::CATEGORY10;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(10.0), 100.0);
        assert_eq!(s.map(5.0), 50.0);
    }

    #[test]
    fn degenerate_linear_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(s.map(3.0), 10.0);
    }

    #[test]
    fn time_scale_ticks_are_january_instants() {
        let s = ScaleTime::new(
            (
                calendar::month_instant(1760, 3),
                calendar::month_instant(1990, 11),
            ),
            (0.0, 715.0),
        );
        let ticks = s.ticks(10);
        assert!(ticks.len() >= 2);
        for t in ticks {
            assert_eq!(t % 12.0, 0.0, "tick {t} is not a January instant");
        }
    }

    #[test]
    fn band_scale_divides_range_into_equal_bands() {
        let labels: Vec<String> = (0..12).map(|i| alloc::format!("m{i}")).collect();
        let band = ScaleBand::new((0.0, 390.0), labels);
        assert_eq!(band.band_width(), 390.0 / 12.0);
        assert_eq!(band.position_of_index(0), 0.0);
        assert_eq!(band.position_of_index(11), 11.0 * 390.0 / 12.0);
    }

    #[test]
    fn band_domain_keeps_first_seen_order() {
        let spec =
            ScaleBandSpec::from_labels_first_seen(["March", "January", "March", "February"]);
        assert_eq!(spec.labels, vec!["March", "January", "February"]);
    }

    #[test]
    fn band_position_by_unknown_label_is_none() {
        let spec = ScaleBandSpec::from_labels_first_seen(["January"]);
        let band = spec.instantiate((0.0, 100.0));
        assert_eq!(band.position("January"), Some(0.0));
        assert_eq!(band.position("Smarch"), None);
    }

    #[test]
    fn ordinal_scale_assigns_palette_in_first_seen_order_and_cycles() {
        let mut ordinal = ScaleOrdinal::new(CATEGORY10);
        for i in 0..15 {
            let _ = ordinal.scale(f64::from(i) * 0.1);
        }
        assert_eq!(ordinal.domain().len(), 15);
        // Eleventh distinct value wraps back to the first palette entry.
        assert_eq!(ordinal.get(1.0), Some(CATEGORY10[0]));
        assert_eq!(ordinal.get(0.0), Some(CATEGORY10[0]));
        assert_eq!(ordinal.get(0.1), Some(CATEGORY10[1]));
    }

    #[test]
    fn ordinal_scale_is_stable_for_repeated_values() {
        let mut ordinal = ScaleOrdinal::new(CATEGORY10);
        let first = ordinal.scale(-0.5);
        let _ = ordinal.scale(0.25);
        let again = ordinal.scale(-0.5);
        assert_eq!(first, again);
        assert_eq!(ordinal.domain(), &[-0.5, 0.25]);
    }
}
