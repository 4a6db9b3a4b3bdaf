// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A single [`AxisSpec`] with an `orient` of `bottom` or `left` generates the
//! domain line, tick marks, and tick labels for one side of the plot. Mark ids
//! are deterministic offsets from `id_base` so re-generating an axis updates
//! marks in place instead of minting new identities.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use anomap_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::calendar::format_year;
use crate::format::format_tick_with_step;
use crate::scale::{ScaleBand, ScaleContinuous, ScaleLinear, ScaleSpec, ScaleTime};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines and ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Axis orientation.
///
/// The heatmap only needs the two classic D3 placements: a time axis below the
/// plot and a month-band axis to its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification (scale + orient + styling options).
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (continuous scales only; band scales tick
    /// every band).
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter.
    ///
    /// The second argument is the tick step (best-effort), usable for
    /// consistent decimal formatting.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification with sensible defaults.
    ///
    /// The returned axis has `tick_count = 10`, `tick_size = 6`, and a tick
    /// padding of `3`.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 6.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns a continuous scale mapping axis values into plot coordinates.
    ///
    /// Panics if this axis uses a band scale.
    pub fn scale_continuous(&self, plot: Rect) -> ScaleContinuous {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            // Larger domain values map upward.
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        match &self.scale {
            ScaleSpec::Linear(s) => {
                ScaleContinuous::Linear(s.instantiate_resolved(range, self.tick_count))
            }
            ScaleSpec::Time(s) => ScaleContinuous::Time(s.instantiate(range)),
            ScaleSpec::Band(_) => panic!("scale_continuous called on a band axis scale"),
        }
    }

    /// Returns a band scale mapping band indices into plot coordinates.
    ///
    /// Band ranges run from the plot's start edge in label order on either
    /// orient, so the first label sits leftmost (bottom axis) or topmost (left
    /// axis).
    ///
    /// Panics if this axis uses a continuous scale.
    pub fn scale_band(&self, plot: Rect) -> ScaleBand {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y0, plot.y1),
        };
        match &self.scale {
            ScaleSpec::Band(s) => s.instantiate(range),
            _ => panic!("scale_band called on a non-band axis scale"),
        }
    }

    fn tick_values(&self) -> (Vec<f64>, f64) {
        match &self.scale {
            ScaleSpec::Linear(s) => {
                let domain = s.resolved_domain(self.tick_count);
                let tmp = ScaleLinear::new(domain, (0.0, 1.0));
                let ticks = tmp.ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            ScaleSpec::Time(s) => {
                let tmp = ScaleTime::new(s.domain, (0.0, 1.0));
                let ticks = tmp.ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            ScaleSpec::Band(s) => {
                let ticks: Vec<f64> = (0..s.labels.len()).map(|i| i as f64).collect();
                (ticks, 1.0)
            }
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        if let Some(f) = &self.tick_formatter {
            return (f)(v, step);
        }
        match &self.scale {
            ScaleSpec::Time(_) => format_year(v),
            ScaleSpec::Band(s) => {
                let index = discrete_index(v);
                s.labels.get(index).cloned().unwrap_or_default()
            }
            ScaleSpec::Linear(_) => format_tick_with_step(v, step),
        }
    }

    /// Generate axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot),
            AxisOrient::Left => self.marks_left(plot),
        }
    }

    fn marks_bottom(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();

        let is_band = matches!(self.scale, ScaleSpec::Band(_));
        let continuous_scale = (!is_band).then(|| self.scale_continuous(plot));
        let band_scale = is_band.then(|| self.scale_band(plot));
        let band_width = band_scale.as_ref().map(ScaleBand::band_width).unwrap_or(0.0);

        let tick_x = |v: f64| match (&continuous_scale, &band_scale) {
            (Some(s), _) => s.map(v),
            (None, Some(b)) => b.position_of_index(discrete_index(v)) + 0.5 * band_width,
            (None, None) => unreachable!("axis scale is either continuous or band"),
        };

        let mut out = Vec::new();

        if self.show_domain {
            let mut domain = BezPath::new();
            domain.move_to((plot.x0, y));
            domain.line_to((plot.x1, y));
            out.push(
                Mark::stroked_path(
                    MarkId::from_raw(self.id_base),
                    domain,
                    self.style.rule.brush.clone(),
                    self.style.rule.stroke_width,
                )
                .with_z_index(z_order::AXIS_RULES),
            );
        }

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = tick_x(v);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }
            let label = self.format_tick(v, step);

            if self.ticks {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x, y + tick_size));
                out.push(
                    Mark::stroked_path(
                        MarkId::from_raw(self.id_base + 1 + i as u64),
                        tick,
                        self.style.rule.brush.clone(),
                        self.style.rule.stroke_width,
                    )
                    .with_z_index(z_order::AXIS_RULES),
                );
            }

            if self.labels {
                // Edge labels hug the plot so a label for a tick at the very
                // edge doesn't spill past the chart.
                let (anchor, x) = if is_band {
                    (TextAnchor::Middle, x)
                } else if i == 0 {
                    (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
                } else if i + 1 == ticks_len {
                    (TextAnchor::End, x.clamp(plot.x0, plot.x1))
                } else {
                    (TextAnchor::Middle, x)
                };

                let mut mark = Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(x, y + tick_extent + label_gap),
                    label,
                );
                if let anomap_core::MarkPayload::Text(t) = &mut mark.payload {
                    t.anchor = anchor;
                    t.baseline = TextBaseline::Hanging;
                    t.font_size = self.style.label_font_size;
                    t.fill = self.style.label_fill.clone();
                }
                out.push(mark.with_z_index(z_order::AXIS_LABELS));
            }
        }

        out
    }

    fn marks_left(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();

        let is_band = matches!(self.scale, ScaleSpec::Band(_));
        let continuous_scale = (!is_band).then(|| self.scale_continuous(plot));
        let band_scale = is_band.then(|| self.scale_band(plot));
        let band_width = band_scale.as_ref().map(ScaleBand::band_width).unwrap_or(0.0);

        let tick_y = |v: f64| match (&continuous_scale, &band_scale) {
            (Some(s), _) => s.map(v),
            (None, Some(b)) => b.position_of_index(discrete_index(v)) + 0.5 * band_width,
            (None, None) => unreachable!("axis scale is either continuous or band"),
        };

        let mut out = Vec::new();

        if self.show_domain {
            let mut domain = BezPath::new();
            domain.move_to((x, plot.y0));
            domain.line_to((x, plot.y1));
            out.push(
                Mark::stroked_path(
                    MarkId::from_raw(self.id_base),
                    domain,
                    self.style.rule.brush.clone(),
                    self.style.rule.stroke_width,
                )
                .with_z_index(z_order::AXIS_RULES),
            );
        }

        for (i, v) in ticks.into_iter().enumerate() {
            let y = tick_y(v);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }
            let label = self.format_tick(v, step);

            if self.ticks {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x - tick_size, y));
                out.push(
                    Mark::stroked_path(
                        MarkId::from_raw(self.id_base + 1 + i as u64),
                        tick,
                        self.style.rule.brush.clone(),
                        self.style.rule.stroke_width,
                    )
                    .with_z_index(z_order::AXIS_RULES),
                );
            }

            if self.labels {
                let mut mark = Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(x - tick_extent - label_gap, y),
                    label,
                );
                if let anomap_core::MarkPayload::Text(t) = &mut mark.payload {
                    t.anchor = TextAnchor::End;
                    t.baseline = TextBaseline::Middle;
                    t.font_size = self.style.label_font_size;
                    t.fill = self.style.label_fill.clone();
                }
                out.push(mark.with_z_index(z_order::AXIS_LABELS));
            }
        }

        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

fn discrete_index(v: f64) -> usize {
    if !v.is_finite() || v < 0.0 {
        return 0;
    }
    let v = v.round().min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is clamped to a small non-negative range"
    )]
    {
        v as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use anomap_core::MarkPayload;
    use kurbo::Rect;

    use super::*;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec, ScaleTimeSpec};

    fn text_marks(marks: &[Mark]) -> Vec<&anomap_core::TextMark> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_generates_domain_ticks_and_labels() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(5);
        let marks = axis.marks(plot);

        let paths = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Path(_)))
            .count();
        let labels = text_marks(&marks).len();
        // Domain line + one tick per label.
        assert_eq!(paths, labels + 1);
        assert!(labels >= 2);
    }

    #[test]
    fn axis_uses_custom_tick_formatter_for_labels() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_tick_formatter(|_v, _step| String::from("X"));

        let marks = axis.marks(plot);
        let labels = text_marks(&marks);
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|t| t.text == "X"));
    }

    #[test]
    fn time_axis_labels_are_years() {
        let plot = Rect::new(60.0, 80.0, 775.0, 470.0);
        let domain = (
            crate::calendar::month_instant(1753, 1),
            crate::calendar::month_instant(2015, 9),
        );
        let axis = AxisSpec::bottom(100, ScaleTimeSpec::new(domain)).with_tick_count(10);

        let marks = axis.marks(plot);
        let labels = text_marks(&marks);
        assert!(!labels.is_empty());
        for t in labels {
            assert_eq!(t.text.len(), 4, "expected 4-digit year, got {:?}", t.text);
            assert!(t.text.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn left_band_axis_puts_first_label_at_the_top() {
        let plot = Rect::new(60.0, 80.0, 775.0, 470.0);
        let spec = ScaleBandSpec::from_labels_first_seen(["January", "February", "March"]);
        let axis = AxisSpec::left(200, spec);

        let marks = axis.marks(plot);
        let labels = text_marks(&marks);
        assert_eq!(labels.len(), 3);
        let january = labels.iter().find(|t| t.text == "January").unwrap();
        let march = labels.iter().find(|t| t.text == "March").unwrap();
        assert!(january.pos.y < march.pos.y);
        // Centered in the first band.
        let band_h = (plot.y1 - plot.y0) / 3.0;
        assert!((january.pos.y - (plot.y0 + 0.5 * band_h)).abs() < 1e-9);
    }

    #[test]
    fn left_continuous_axis_maps_larger_values_upward() {
        let plot = Rect::new(0.0, 0.0, 100.0, 100.0);
        let axis = AxisSpec::left(1, ScaleLinearSpec::new((0.0, 10.0)));
        let scale = axis.scale_continuous(plot);
        assert!(scale.map(10.0) < scale.map(0.0));
    }

    #[test]
    fn bottom_edge_labels_clamp_anchor_to_the_plot() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(5);
        let marks = axis.marks(plot);
        let labels = text_marks(&marks);
        assert!(labels.len() >= 2);
        assert_eq!(labels.first().unwrap().anchor, TextAnchor::Start);
        assert_eq!(labels.last().unwrap().anchor, TextAnchor::End);
    }

    #[test]
    fn axis_without_ticks_emits_no_tick_path_marks() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_ticks(false)
            .with_domain(false);

        let marks = axis.marks(plot);
        assert!(
            marks
                .iter()
                .all(|m| !matches!(m.payload, MarkPayload::Path(_))),
            "expected no path marks when ticks/domain are disabled"
        );
    }
}
