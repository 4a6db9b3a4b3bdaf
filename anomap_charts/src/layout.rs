// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart layout with fixed authored margins.
//!
//! The heatmap keeps the original chart geometry: a plot rectangle surrounded
//! by hand-tuned margins, with the legend strip centered below the plot. There
//! is no measure pass; the margins are part of the chart's authored look, so
//! layout is a pure arrange step.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// Per-side margins around the plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space to the right of the plot.
    pub right: f64,
    /// Space below the plot (axis strip).
    pub bottom: f64,
    /// Space to the left of the plot (axis strip).
    pub left: f64,
}

/// Layout inputs: plot size, margins, and an optional bottom legend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// The plot rectangle size (the data area).
    pub plot_size: Size,
    /// Authored margins around the plot.
    pub margins: Margins,
    /// An optional legend strip below the plot: its size plus the vertical
    /// offset from the plot's bottom edge.
    pub legend_bottom: Option<(Size, f64)>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The plot rectangle.
    pub plot: Rect,
    /// The left-axis strip, adjacent to the plot.
    pub axis_left: Rect,
    /// The bottom-axis strip, adjacent to the plot.
    pub axis_bottom: Rect,
    /// Legend placement rectangle (if any), centered under the plot.
    pub legend: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    ///
    /// The bottom margin grows if the legend (offset + height) needs more room
    /// than the authored bottom margin provides, so the legend always fits
    /// inside `view`.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let plot_w = spec.plot_size.width.max(0.0);
        let plot_h = spec.plot_size.height.max(0.0);
        let left = spec.margins.left.max(0.0);
        let right = spec.margins.right.max(0.0);
        let top = spec.margins.top.max(0.0);
        let mut bottom = spec.margins.bottom.max(0.0);

        if let Some((legend_size, offset)) = spec.legend_bottom {
            bottom = bottom.max(offset.max(0.0) + legend_size.height.max(0.0));
        }

        let plot = Rect::new(left, top, left + plot_w, top + plot_h);
        let view = Rect::new(0.0, 0.0, left + plot_w + right, top + plot_h + bottom);

        let axis_left = Rect::new(plot.x0 - left, plot.y0, plot.x0, plot.y1);
        let axis_bottom = Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + bottom);

        let legend = spec.legend_bottom.map(|(legend_size, offset)| {
            let w = legend_size.width.max(0.0);
            let h = legend_size.height.max(0.0);
            let x0 = 0.5 * (plot.x0 + plot.x1) - 0.5 * w;
            let y0 = plot.y1 + offset.max(0.0);
            Rect::new(x0, y0, x0 + w, y0 + h)
        });

        Self {
            view,
            plot,
            axis_left,
            axis_bottom,
            legend,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn heatmap_spec() -> ChartLayoutSpec {
        ChartLayoutSpec {
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
            legend_bottom: Some((
                Size {
                    width: 300.0,
                    height: 20.0,
                },
                40.0,
            )),
        }
    }

    #[test]
    fn plot_sits_inside_the_authored_margins() {
        let layout = ChartLayout::arrange(&heatmap_spec());
        assert_eq!(layout.plot, Rect::new(60.0, 80.0, 775.0, 470.0));
        assert_eq!(layout.view.x1, 800.0);
    }

    #[test]
    fn bottom_margin_grows_to_fit_the_legend() {
        let layout = ChartLayout::arrange(&heatmap_spec());
        let legend = layout.legend.expect("missing legend rect");
        // Centered under the plot, 40 below its bottom edge.
        assert_eq!(legend.y0, 470.0 + 40.0);
        assert!((legend.x0 - (60.0 + 715.0 / 2.0 - 150.0)).abs() < 1e-9);
        // The view extends past the nominal 30px bottom margin to hold it.
        assert!(layout.view.y1 >= legend.y1);
    }

    #[test]
    fn layout_without_legend_keeps_the_authored_bottom_margin() {
        let mut spec = heatmap_spec();
        spec.legend_bottom = None;
        let layout = ChartLayout::arrange(&spec);
        assert_eq!(layout.legend, None);
        assert_eq!(layout.view.y1, 80.0 + 390.0 + 30.0);
        assert_eq!(layout.axis_bottom, Rect::new(60.0, 470.0, 775.0, 500.0));
    }
}
