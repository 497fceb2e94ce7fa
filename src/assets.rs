//! One-time loading of the model and its companion JSON assets.
//!
//! Three files are read from a fixed directory at startup and cached for the
//! process lifetime: the serialized model, the expanded column list it was
//! trained on, and the categorical vocabularies that populate the dropdowns.
//! Either all three load or none are usable.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::model::{ModelError, PriceModel};

/// File name of the serialized regression model.
pub const MODEL_FILE: &str = "melbourne_house_price_model.json";
/// File name of the expanded training column list.
pub const MODEL_COLUMNS_FILE: &str = "model_columns.json";
/// File name of the categorical vocabulary document.
pub const APP_DATA_FILE: &str = "app_data.json";

static ASSETS: OnceLock<AssetBundle> = OnceLock::new();

/// Errors raised while loading the startup assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A required asset file is absent.
    #[error("missing asset {path}")]
    MissingAsset {
        /// Path that was expected to exist.
        path: PathBuf,
    },
    /// A required asset file exists but could not be read.
    #[error("failed to read asset {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// A required asset file is not valid JSON for its schema.
    #[error("failed to parse asset {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The model file failed to load or validate.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The model and the column list disagree on the feature count.
    #[error("model has {coefficients} coefficients but {columns} columns are listed")]
    SchemaMismatch {
        /// Coefficient count in the model file.
        coefficients: usize,
        /// Column count in the column list file.
        columns: usize,
    },
}

/// Categorical vocabularies used to populate the dropdown widgets.
#[derive(Debug, Clone, Deserialize)]
pub struct AppData {
    /// Valid values per categorical attribute name.
    pub categorical_cols: BTreeMap<String, Vec<String>>,
}

impl AppData {
    /// Dropdown choices for a categorical field; empty if unknown.
    pub fn choices(&self, field: &str) -> &[String] {
        self.categorical_cols
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn sort_vocabularies(&mut self) {
        for values in self.categorical_cols.values_mut() {
            values.sort();
        }
    }
}

/// The three startup assets, immutable after load.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    /// Trained regression artifact.
    pub model: PriceModel,
    /// Expanded feature schema the model was trained on, in training order.
    pub model_columns: Vec<String>,
    /// Dropdown vocabularies, sorted lexicographically.
    pub app_data: AppData,
}

impl AssetBundle {
    /// Read the three fixed asset files from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let model_path = dir.join(MODEL_FILE);
        let columns_path = dir.join(MODEL_COLUMNS_FILE);
        let app_data_path = dir.join(APP_DATA_FILE);
        for path in [&model_path, &columns_path, &app_data_path] {
            if !path.is_file() {
                return Err(AssetError::MissingAsset { path: path.clone() });
            }
        }

        let model = PriceModel::load_json(&model_path)?;
        let model_columns: Vec<String> = read_json(&columns_path)?;
        let mut app_data: AppData = read_json(&app_data_path)?;
        app_data.sort_vocabularies();

        if model.coefficients.len() != model_columns.len() {
            return Err(AssetError::SchemaMismatch {
                coefficients: model.coefficients.len(),
                columns: model_columns.len(),
            });
        }

        tracing::info!(
            columns = model_columns.len(),
            vocabularies = app_data.categorical_cols.len(),
            "model assets loaded from {}",
            dir.display()
        );
        Ok(Self {
            model,
            model_columns,
            app_data,
        })
    }

    /// Human-readable hint shown alongside a load failure.
    pub fn placement_hint() -> String {
        format!(
            "Place {MODEL_FILE}, {MODEL_COLUMNS_FILE} and {APP_DATA_FILE} next to the application and restart."
        )
    }
}

/// Load the assets once per process and return the cached bundle thereafter.
///
/// The first successful load is stored for the process lifetime; later calls
/// return the same reference without touching the filesystem. Failures are
/// returned without caching, so nothing is usable until the files are fixed.
pub fn load_cached(dir: &Path) -> Result<&'static AssetBundle, AssetError> {
    if let Some(bundle) = ASSETS.get() {
        return Ok(bundle);
    }
    let bundle = AssetBundle::load(dir)?;
    Ok(ASSETS.get_or_init(|| bundle))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
