// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot dataset loading.
//!
//! The dataset is fetched exactly once at startup; there is no polling or
//! refresh. Decoding is split out so the JSON contract is testable without a
//! network.

use anomap_charts::Dataset;
use thiserror::Error;

/// The public monthly global land-surface temperature document.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Why a dataset load failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("fetching the dataset failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("dataset request returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not the expected JSON shape.
    #[error("dataset JSON did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches and decodes the dataset from `url`.
pub fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    tracing::info!(url, "fetching dataset");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    let body = response.text()?;
    let dataset = decode_dataset(&body)?;
    tracing::info!(
        observations = dataset.monthly_variance.len(),
        base_temperature = dataset.base_temperature,
        "dataset loaded"
    );
    Ok(dataset)
}

/// Decodes the dataset from its JSON wire form.
pub fn decode_dataset(json: &str) -> Result<Dataset, LoadError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_shape() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                { "year": 1753, "month": 1, "variance": -1.366 },
                { "year": 1753, "month": 2, "variance": -2.223 }
            ]
        }"#;
        let dataset = decode_dataset(json).expect("decode");
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.monthly_variance.len(), 2);
        assert_eq!(dataset.monthly_variance[0].year, 1753);
        assert_eq!(dataset.monthly_variance[0].month, 1);
        assert_eq!(dataset.monthly_variance[1].variance, -2.223);
    }

    #[test]
    fn missing_fields_are_a_decode_error() {
        let json = r#"{ "baseTemperature": 8.66 }"#;
        let err = decode_dataset(json).expect_err("should fail");
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn wrong_types_are_a_decode_error() {
        let json = r#"{
            "baseTemperature": "warm",
            "monthlyVariance": []
        }"#;
        assert!(matches!(
            decode_dataset(json),
            Err(LoadError::Decode(_))
        ));
    }
}
