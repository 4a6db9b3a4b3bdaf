// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover tooltip model.
//!
//! Pure state: pointer events go in, tooltip content and placement come out.
//! Rendering the box is a downstream concern.

extern crate alloc;

use alloc::string::String;

use crate::dataset::Observation;
use crate::format::format_celsius;

/// Offset from the pointer to the tooltip's top-left corner, on both axes.
const POINTER_OFFSET: f64 = 10.0;

/// A pointer hover over one heatmap cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEvent {
    /// Pointer x in page coordinates.
    pub pointer_x: f64,
    /// Pointer y in page coordinates.
    pub pointer_y: f64,
    /// The hovered cell's observation.
    pub observation: Observation,
}

/// Tooltip state: hidden, or showing three lines of text near the pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    /// Whether the tooltip is showing.
    pub visible: bool,
    /// Top-left x in page coordinates.
    pub x: f64,
    /// Top-left y in page coordinates.
    pub y: f64,
    /// The hovered observation's year, exposed for the tooltip's data binding.
    pub data_year: i32,
    /// First line: month and year, e.g. `January 1900`.
    pub when: String,
    /// Second line: absolute temperature, e.g. `Temperature: 7.50°C`.
    pub temperature: String,
    /// Third line: variance, e.g. `Variance: -0.50°C`.
    pub variance: String,
}

impl TooltipState {
    /// A hidden tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the tooltip for a hovered cell.
    ///
    /// Placement is offset from the pointer so the box doesn't sit under the
    /// cursor and flicker from self-occlusion.
    pub fn show(&mut self, event: HoverEvent, base_temperature: f64) {
        let obs = event.observation;
        self.visible = true;
        self.x = event.pointer_x + POINTER_OFFSET;
        self.y = event.pointer_y + POINTER_OFFSET;
        self.data_year = obs.year;
        self.when = alloc::format!("{} {}", obs.month_label(), obs.year);
        self.temperature = alloc::format!(
            "Temperature: {}",
            format_celsius(obs.temperature(base_temperature))
        );
        self.variance = alloc::format!("Variance: {}", format_celsius(obs.variance));
    }

    /// Hides the tooltip. Text content is cleared.
    pub fn hide(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn show_fills_all_three_lines() {
        let mut tip = TooltipState::new();
        tip.show(
            HoverEvent {
                pointer_x: 120.0,
                pointer_y: 48.0,
                observation: Observation {
                    year: 1900,
                    month: 1,
                    variance: -0.5,
                },
            },
            8.0,
        );
        assert!(tip.visible);
        assert_eq!(tip.x, 130.0);
        assert_eq!(tip.y, 58.0);
        assert_eq!(tip.data_year, 1900);
        assert_eq!(tip.when, "January 1900");
        assert_eq!(tip.temperature, "Temperature: 7.50\u{b0}C");
        assert_eq!(tip.variance, "Variance: -0.50\u{b0}C");
    }

    #[test]
    fn hide_resets_to_hidden_default() {
        let mut tip = TooltipState::new();
        tip.show(
            HoverEvent {
                pointer_x: 0.0,
                pointer_y: 0.0,
                observation: Observation {
                    year: 2000,
                    month: 6,
                    variance: 0.25,
                },
            },
            8.66,
        );
        tip.hide();
        assert_eq!(tip, TooltipState::default());
        assert!(!tip.visible);
    }
}
