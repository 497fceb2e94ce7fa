//! Serialized regression model predicting log-transformed sale prices.

use std::path::{Path, PathBuf};

use ndarray::{ArrayView1, aview1};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a serialized price model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read the model file from disk.
    #[error("failed to read model file {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The model file is not valid JSON for this schema.
    #[error("failed to parse model file {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The parsed model violates a structural invariant.
    #[error("invalid model: {0}")]
    Invalid(String),
}

/// Fitted linear regression over the expanded property feature columns.
///
/// The coefficient order matches the column list shipped alongside the model
/// (`model_columns.json`); predictions are in `ln(1 + price)` units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    /// Model format version.
    pub model_version: i64,
    /// Name of the trained target, e.g. `Price_log`.
    pub target: String,
    /// Intercept in log-price units.
    pub intercept: f64,
    /// One coefficient per expected feature column, in training order.
    pub coefficients: Vec<f64>,
}

impl PriceModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::Invalid(
                "model must contain at least one coefficient".to_string(),
            ));
        }
        if !self.intercept.is_finite() {
            return Err(ModelError::Invalid("intercept must be finite".to_string()));
        }
        if let Some(idx) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(ModelError::Invalid(format!(
                "coefficient {idx} is not finite"
            )));
        }
        Ok(())
    }

    /// Load a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Predict the log-price for one schema-aligned feature row.
    ///
    /// The row length must equal the coefficient count; asset loading
    /// guarantees this for rows aligned against the shipped column list.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> f64 {
        self.intercept + features.dot(&aview1(&self.coefficients))
    }
}
