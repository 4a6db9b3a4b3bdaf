// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's view model.
//!
//! Holds the outcome of the one-shot load and derives everything the page
//! shows from it: heading, description, and the built heatmap scene. A failed
//! load is not fatal; the page renders with a blank chart and a placeholder
//! description.

use anomap_charts::{CHART_TITLE, Dataset, HeatmapScene, HeatmapSpec, format_celsius};

use crate::loader::LoadError;

/// View state derived from the load outcome.
#[derive(Debug, Default)]
pub struct ViewModel {
    dataset: Option<Dataset>,
}

impl ViewModel {
    /// An empty view model (no data yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of the dataset load.
    pub fn apply_load(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => self.dataset = Some(dataset),
            Err(err) => {
                tracing::error!(error = %err, "dataset load failed; rendering a blank chart");
                self.dataset = None;
            }
        }
    }

    /// The loaded dataset, if the load succeeded.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The page heading.
    pub fn title(&self) -> &'static str {
        CHART_TITLE
    }

    /// The page description: the dataset's base temperature, or a placeholder
    /// when no data loaded.
    pub fn description(&self) -> String {
        match &self.dataset {
            Some(dataset) => format!(
                "Base temperature: {}",
                format_celsius(dataset.base_temperature)
            ),
            None => String::from("Base temperature: unavailable"),
        }
    }

    /// Builds the heatmap scene for the current state.
    pub fn scene(&self, spec: &HeatmapSpec) -> HeatmapScene {
        static EMPTY: &Dataset = &Dataset {
            base_temperature: 0.0,
            monthly_variance: Vec::new(),
        };
        spec.build(self.dataset.as_ref().unwrap_or(EMPTY))
    }
}

#[cfg(test)]
mod tests {
    use anomap_charts::Observation;

    use super::*;

    fn small_dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                Observation {
                    year: 1900,
                    month: 1,
                    variance: -0.5,
                },
                Observation {
                    year: 1900,
                    month: 2,
                    variance: 0.25,
                },
            ],
        }
    }

    #[test]
    fn successful_load_drives_title_and_description() {
        let mut view = ViewModel::new();
        view.apply_load(Ok(small_dataset()));
        assert_eq!(view.title(), "Monthly Global Land-Surface Temperature");
        assert_eq!(view.description(), "Base temperature: 8.66\u{b0}C");
        let scene = view.scene(&HeatmapSpec::default());
        assert_eq!(scene.cells.len(), 2);
    }

    #[test]
    fn failed_load_renders_a_blank_chart() {
        let mut view = ViewModel::new();
        view.apply_load(Err(LoadError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(view.dataset(), None);
        assert_eq!(view.description(), "Base temperature: unavailable");
        let scene = view.scene(&HeatmapSpec::default());
        assert!(scene.cells.is_empty());
        assert!(scene.all_marks().is_empty());
    }
}
