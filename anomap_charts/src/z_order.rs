// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! `anomap_core` marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so callers don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Heatmap cell fills.
pub const CELLS: i32 = 0;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend axis rules and labels.
pub const LEGEND_LABELS: i32 = 70;
