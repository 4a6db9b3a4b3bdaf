// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The monthly land-surface temperature heatmap.
//!
//! [`HeatmapSpec::build`] is a pure function from a [`Dataset`] to a
//! [`HeatmapScene`]: layout, guide marks (axes + legend), and one [`Cell`] per
//! observation. Building the same dataset twice yields identical mark ids and
//! geometry, so a scene diff between rebuilds is empty.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use anomap_core::Mark;
use kurbo::Rect;
use peniko::Color;

use crate::axis::AxisSpec;
use crate::cell::Cell;
use crate::dataset::Dataset;
use crate::layout::{ChartLayout, ChartLayoutSpec, Margins, Size};
use crate::legend::{LegendEntry, LegendStripSpec};
use crate::palette::CATEGORY10;
use crate::scale::{ScaleBandSpec, ScaleOrdinal, ScaleTimeSpec};

/// The chart's heading text.
pub const CHART_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Heatmap chart specification: geometry, palette, and mark-id bases.
#[derive(Clone, Debug)]
pub struct HeatmapSpec {
    /// Plot rectangle size.
    pub plot_size: Size,
    /// Authored margins around the plot.
    pub margins: Margins,
    /// Legend strip size.
    pub legend_size: Size,
    /// Vertical gap between the plot's bottom edge and the legend strip.
    pub legend_offset: f64,
    /// Ordinal color palette, cycled over distinct variance values.
    pub palette: Vec<Color>,
    /// Approximate x-axis tick count.
    pub x_tick_count: usize,
    /// Approximate legend-axis tick count.
    pub legend_tick_count: usize,
    /// Stable-id base for the x axis.
    pub x_axis_id_base: u64,
    /// Stable-id base for the y axis.
    pub y_axis_id_base: u64,
    /// Stable-id base for cell marks (`base + observation index`).
    pub cells_id_base: u64,
    /// Stable-id base for the legend strip.
    pub legend_id_base: u64,
}

impl Default for HeatmapSpec {
    fn default() -> Self {
        Self {
            plot_size: Size {
                width: 715.0,
                height: 390.0,
            },
            margins: Margins {
                top: 80.0,
                right: 25.0,
                bottom: 30.0,
                left: 60.0,
            },
            legend_size: Size {
                width: 300.0,
                height: 20.0,
            },
            legend_offset: 40.0,
            palette: CATEGORY10.to_vec(),
            x_tick_count: 10,
            legend_tick_count: 10,
            x_axis_id_base: 100,
            y_axis_id_base: 2_000,
            cells_id_base: 10_000,
            legend_id_base: 20_000,
        }
    }
}

/// A built heatmap: layout, guide marks, and hover-ready cells.
#[derive(Clone, Debug)]
pub struct HeatmapScene {
    /// The arranged layout.
    pub layout: ChartLayout,
    /// Guide marks: axes and legend.
    pub guides: Vec<Mark>,
    /// One cell per observation, in dataset order.
    pub cells: Vec<Cell>,
    /// X domain in month instants, `None` for an empty dataset.
    pub x_domain: Option<(f64, f64)>,
    /// Month labels in first-seen order (the y-axis domain).
    pub month_labels: Vec<String>,
    /// Distinct variance values in first-seen order (the color domain).
    pub color_domain: Vec<f64>,
    cells_id_base: u64,
}

impl HeatmapSpec {
    /// Builds the heatmap scene from a dataset.
    ///
    /// An empty dataset is not an error: it yields a scene with layout but no
    /// cells, axes, or legend.
    pub fn build(&self, dataset: &Dataset) -> HeatmapScene {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            plot_size: self.plot_size,
            margins: self.margins,
            legend_bottom: Some((self.legend_size, self.legend_offset)),
        });
        let plot = layout.plot;

        let x_domain = dataset.instant_extent();
        let month_labels = ScaleBandSpec::from_labels_first_seen(
            dataset.monthly_variance.iter().map(|o| o.month_label()),
        );

        let mut ordinal = ScaleOrdinal::new(self.palette.clone());
        let mut cells = Vec::with_capacity(dataset.monthly_variance.len());
        let mut guides = Vec::new();

        if let Some(domain) = x_domain {
            let x_spec = ScaleTimeSpec::new(domain);
            let x_scale = x_spec.instantiate((plot.x0, plot.x1));
            let y_band = month_labels.instantiate((plot.y0, plot.y1));

            let n = dataset.monthly_variance.len();
            // One column per year of data; every cell is one month wide and
            // one band tall.
            let cell_w = plot.width() * 12.0 / n as f64;
            let cell_h = plot.height() / 12.0;

            for (index, obs) in dataset.monthly_variance.iter().enumerate() {
                let fill = ordinal.scale(obs.variance);
                let x0 = x_scale.map(obs.instant());
                let y0 = y_band.position(obs.month_label()).unwrap_or(plot.y0);
                cells.push(Cell {
                    index,
                    rect: Rect::new(x0, y0, x0 + cell_w, y0 + cell_h),
                    fill,
                    observation: *obs,
                    temperature: obs.temperature(dataset.base_temperature),
                });
            }

            guides.extend(
                AxisSpec::bottom(self.x_axis_id_base, x_spec)
                    .with_tick_count(self.x_tick_count)
                    .marks(plot),
            );
            guides.extend(AxisSpec::left(self.y_axis_id_base, month_labels.clone()).marks(plot));

            if let Some(legend_rect) = layout.legend {
                let entries: Vec<LegendEntry> = ordinal
                    .domain()
                    .iter()
                    .map(|v| LegendEntry {
                        value: *v,
                        // Domain values always resolve; they were just scaled.
                        fill: ordinal.get(*v).unwrap_or(Color::BLACK),
                    })
                    .collect();
                guides.extend(
                    LegendStripSpec::new(self.legend_id_base, entries)
                        .with_size(self.legend_size)
                        .with_tick_count(self.legend_tick_count)
                        .marks(legend_rect),
                );
            }
        }

        HeatmapScene {
            layout,
            guides,
            cells,
            x_domain,
            month_labels: month_labels.labels,
            color_domain: ordinal.domain().to_vec(),
            cells_id_base: self.cells_id_base,
        }
    }
}

impl HeatmapScene {
    /// All marks for this scene: guides plus cells.
    pub fn all_marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.guides.len() + self.cells.len());
        out.extend(self.guides.iter().cloned());
        out.extend(self.cells.iter().map(|c| c.mark(self.cells_id_base)));
        out
    }

    /// The mark-id base used for cells, for renderers that bind cell metadata
    /// by mark id.
    pub fn cells_id_base(&self) -> u64 {
        self.cells_id_base
    }

    /// Finds the cell under a scene-coordinate point, if any.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.cells.iter().find(|c| c.contains(x, y))
    }
}
