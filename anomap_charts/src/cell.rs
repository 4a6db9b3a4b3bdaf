// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heatmap cells: one rectangle per monthly observation.

extern crate alloc;

use alloc::string::String;

use anomap_core::{Mark, MarkId};
use kurbo::Rect;
use peniko::{Brush, Color};

use crate::dataset::Observation;
use crate::z_order;

/// One heatmap cell: an observation bound to its screen rectangle and color.
///
/// Cells are the chart's hover targets, so they carry both the geometry and
/// the source observation; a hit test yields everything the tooltip needs
/// without going back to the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Position of this cell's observation in the dataset's input order.
    pub index: usize,
    /// Cell geometry in scene coordinates.
    pub rect: Rect,
    /// Fill assigned by the ordinal color scale.
    pub fill: Color,
    /// The source observation.
    pub observation: Observation,
    /// Absolute temperature (base + variance), precomputed at build time.
    pub temperature: f64,
}

impl Cell {
    /// The zero-based month index carried on the rendered cell.
    pub fn month_index(&self) -> u32 {
        self.observation.month_index()
    }

    /// The observation's calendar year.
    pub fn year(&self) -> i32 {
        self.observation.year
    }

    /// The 4-digit year label carried on the rendered cell.
    pub fn year_label(&self) -> String {
        alloc::format!("{}", self.observation.year)
    }

    /// The observation's variance from the base temperature.
    pub fn variance(&self) -> f64 {
        self.observation.variance
    }

    /// Whether a scene-coordinate point falls inside this cell.
    ///
    /// The right and bottom edges are exclusive so adjacent cells don't both
    /// claim their shared edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.rect.x0 && x < self.rect.x1 && y >= self.rect.y0 && y < self.rect.y1
    }

    /// Generates the fill mark for this cell.
    ///
    /// Ids are `id_base + index`, so rebuilding the chart from the same
    /// dataset updates cells in place.
    pub fn mark(&self, id_base: u64) -> Mark {
        Mark::rect(
            MarkId::from_raw(id_base + self.index as u64),
            self.rect,
            Brush::Solid(self.fill),
        )
        .with_z_index(z_order::CELLS)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use anomap_core::MarkPayload;

    use super::*;

    fn cell() -> Cell {
        Cell {
            index: 3,
            rect: Rect::new(10.0, 20.0, 15.0, 52.5),
            fill: Color::from_rgb8(0x1f, 0x77, 0xb4),
            observation: Observation {
                year: 1900,
                month: 1,
                variance: -0.5,
            },
            temperature: 7.5,
        }
    }

    #[test]
    fn derived_labels_match_the_observation() {
        let c = cell();
        assert_eq!(c.month_index(), 0);
        assert_eq!(c.year_label(), "1900");
        assert_eq!(c.variance(), -0.5);
    }

    #[test]
    fn hit_test_excludes_the_far_edges() {
        let c = cell();
        assert!(c.contains(10.0, 20.0));
        assert!(c.contains(14.999, 52.0));
        assert!(!c.contains(15.0, 30.0));
        assert!(!c.contains(12.0, 52.5));
    }

    #[test]
    fn mark_id_is_base_plus_index() {
        let c = cell();
        let m = c.mark(10_000);
        assert_eq!(m.id, MarkId::from_raw(10_003));
        assert_eq!(m.z_index, z_order::CELLS);
        assert!(matches!(m.payload, MarkPayload::Rect(_)));
    }
}
