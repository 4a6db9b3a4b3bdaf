// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heatmap chart building blocks for `anomap_core`.
//!
//! This crate is a small, reusable layer above `anomap_core`:
//! - **Scales** map data values into screen coordinates.
//! - **Guides** (axes, the legend strip) are built by generating
//!   [`anomap_core::Mark`]s.
//! - The **heatmap** module composes both into the monthly land-surface
//!   temperature chart: a pure function from a [`Dataset`] to a
//!   [`HeatmapScene`] (cells, guide marks, layout), plus a typed hover and
//!   tooltip model.
//!
//! Rendering and data loading live downstream (`anomap_viewer`); everything
//! here is deterministic and side-effect free. Text shaping and layout are
//! out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod calendar;
mod cell;
mod dataset;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod heatmap;
mod layout;
mod legend;
mod palette;
mod scale;
mod tooltip;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use calendar::{MONTH_NAMES, format_year, month_instant, month_name, nice_year_ticks};
pub use cell::Cell;
pub use dataset::{Dataset, Observation};
pub use format::{format_celsius, format_tick_with_step};
pub use heatmap::{CHART_TITLE, HeatmapScene, HeatmapSpec};
pub use layout::{ChartLayout, ChartLayoutSpec, Margins, Size};
pub use legend::{LegendEntry, LegendStripSpec};
pub use palette::CATEGORY10;
pub use scale::{
    ScaleBand, ScaleBandSpec, ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleOrdinal,
    ScaleSpec, ScaleTime, ScaleTimeSpec,
};
pub use tooltip::{HoverEvent, TooltipState};
pub use z_order::*;
