// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend strip generation.
//!
//! The heatmap legend is a horizontal strip of equal-width color swatches, one
//! per distinct value in the ordinal color domain, with a linear axis drawn
//! beneath it.
//!
//! The axis domain is a quirk kept on purpose: only the **first two** distinct
//! variance values span the strip, because the original chart paired the full
//! ordinal domain with a two-stop pixel range and the shorter list won. With a
//! realistic dataset the resulting labels are close together and largely
//! meaningless, which is faithful to how this chart has always looked.

extern crate alloc;

use alloc::vec::Vec;

use anomap_core::{Mark, MarkId};
use kurbo::Rect;
use peniko::{Brush, Color};

use crate::axis::AxisSpec;
use crate::layout::Size;
use crate::scale::ScaleLinearSpec;
use crate::z_order;

/// One legend swatch: a distinct color-domain value and its fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendEntry {
    /// The distinct data value this swatch stands for.
    pub value: f64,
    /// The swatch fill.
    pub fill: Color,
}

/// A horizontal legend strip specification.
#[derive(Clone, Debug)]
pub struct LegendStripSpec {
    /// Stable-id base; swatches use `id_base + i`, the axis uses offsets from
    /// `id_base + 5000`.
    pub id_base: u64,
    /// Strip size (swatches only; the axis hangs below).
    pub size: Size,
    /// Approximate number of axis ticks.
    pub tick_count: usize,
    /// Entries in color-domain (first-seen) order.
    pub entries: Vec<LegendEntry>,
}

impl LegendStripSpec {
    /// Creates a legend strip spec with the chart's stock geometry.
    pub fn new(id_base: u64, entries: Vec<LegendEntry>) -> Self {
        Self {
            id_base,
            size: Size {
                width: 300.0,
                height: 20.0,
            },
            tick_count: 10,
            entries,
        }
    }

    /// Sets the strip size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the approximate axis tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// The axis domain: the first two distinct entry values, if present.
    pub fn axis_domain(&self) -> Option<(f64, f64)> {
        match self.entries.as_slice() {
            [a, b, ..] => Some((a.value, b.value)),
            _ => None,
        }
    }

    /// Generates legend marks into the given strip rectangle.
    ///
    /// `strip` should have this spec's size; swatches fill it edge to edge and
    /// the axis is drawn along its bottom edge.
    pub fn marks(&self, strip: Rect) -> Vec<Mark> {
        let mut out = Vec::new();
        let n = self.entries.len();
        if n == 0 {
            return out;
        }

        let swatch_w = strip.width() / n as f64;
        for (i, entry) in self.entries.iter().enumerate() {
            let x0 = strip.x0 + swatch_w * i as f64;
            out.push(
                Mark::rect(
                    MarkId::from_raw(self.id_base + i as u64),
                    Rect::new(x0, strip.y0, x0 + swatch_w, strip.y1),
                    Brush::Solid(entry.fill),
                )
                .with_z_index(z_order::LEGEND_SWATCHES),
            );
        }

        if let Some(domain) = self.axis_domain() {
            let axis = AxisSpec::bottom(self.id_base + 5000, ScaleLinearSpec::new(domain))
                .with_tick_count(self.tick_count);
            out.extend(
                axis.marks(strip)
                    .into_iter()
                    .map(|m| m.with_z_index(z_order::LEGEND_LABELS)),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use anomap_core::MarkPayload;

    use super::*;
    use crate::palette::CATEGORY10;

    fn entries(values: &[f64]) -> Vec<LegendEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| LegendEntry {
                value: *v,
                fill: CATEGORY10[i % CATEGORY10.len()],
            })
            .collect()
    }

    #[test]
    fn one_swatch_per_entry_with_equal_widths() {
        let spec = LegendStripSpec::new(1, entries(&[-0.5, 0.0, 0.5, 1.0]));
        let strip = Rect::new(100.0, 430.0, 400.0, 450.0);
        let marks = spec.marks(strip);

        let swatches: Vec<&Rect> = marks
            .iter()
            .filter(|m| m.z_index == z_order::LEGEND_SWATCHES)
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(&r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(swatches.len(), 4);
        for (i, r) in swatches.iter().enumerate() {
            assert!((r.width() - 75.0).abs() < 1e-9);
            assert!((r.x0 - (100.0 + 75.0 * i as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn axis_domain_is_the_first_two_distinct_values() {
        let spec = LegendStripSpec::new(1, entries(&[-1.366, -2.223, 0.5, 1.0]));
        assert_eq!(spec.axis_domain(), Some((-1.366, -2.223)));
    }

    #[test]
    fn single_entry_legend_has_swatch_but_no_axis() {
        let spec = LegendStripSpec::new(1, entries(&[0.5]));
        let strip = Rect::new(0.0, 0.0, 300.0, 20.0);
        let marks = spec.marks(strip);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].z_index, z_order::LEGEND_SWATCHES);
    }

    #[test]
    fn empty_legend_generates_nothing() {
        let spec = LegendStripSpec::new(1, vec![]);
        assert!(spec.marks(Rect::new(0.0, 0.0, 300.0, 20.0)).is_empty());
    }

    #[test]
    fn axis_marks_use_the_legend_z_order() {
        let spec = LegendStripSpec::new(1, entries(&[-0.5, 0.5]));
        let strip = Rect::new(0.0, 0.0, 300.0, 20.0);
        let marks = spec.marks(strip);
        assert!(
            marks
                .iter()
                .any(|m| m.z_index == z_order::LEGEND_LABELS
                    && matches!(m.payload, MarkPayload::Text(_)))
        );
    }
}
