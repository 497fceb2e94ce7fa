//! Property record assembly, indicator expansion and schema alignment.
//!
//! The model was trained on a frame whose categorical columns were expanded
//! into `<field>_<value>` indicator columns. A fresh record from the form is
//! expanded the same way, then aligned against the shipped column list so the
//! model always receives the schema it was trained on.

use std::collections::BTreeMap;

use ndarray::Array1;

/// Numeric training column: total room count.
pub const COL_ROOMS: &str = "Rooms";
/// Numeric training column: distance from the CBD in km.
pub const COL_DISTANCE: &str = "Distance";
/// Numeric training column: bedroom count (the dataset's `Bedroom2`).
pub const COL_BEDROOMS: &str = "Bedroom2";
/// Numeric training column: bathroom count.
pub const COL_BATHROOMS: &str = "Bathroom";
/// Numeric training column: car spots.
pub const COL_CAR: &str = "Car";
/// Numeric training column: properties in the suburb.
pub const COL_PROPERTY_COUNT: &str = "Propertycount";
/// Numeric training column: property age in years.
pub const COL_AGE: &str = "Age";
/// Numeric training column: `ln(1 + land size in sqm)`.
pub const COL_LANDSIZE_LOG: &str = "Landsize_log";

/// Categorical field expanded into suburb indicators.
pub const FIELD_SUBURB: &str = "Suburb";
/// Categorical field expanded into dwelling-type indicators.
pub const FIELD_TYPE: &str = "Type";
/// Categorical field expanded into sale-method indicators.
pub const FIELD_METHOD: &str = "Method";
/// Categorical field expanded into region indicators.
pub const FIELD_REGION: &str = "Regionname";

/// One row of property attributes captured at the moment of prediction.
///
/// Numeric fields carry the raw widget values except `landsize_log`, which
/// holds the `ln(1 + sqm)` value the model was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    /// Total number of rooms.
    pub rooms: u32,
    /// Distance from the CBD in km.
    pub distance: f64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
    /// Number of car parking spots.
    pub car_spots: u32,
    /// Number of properties in the suburb.
    pub property_count: u32,
    /// Property age in years.
    pub age: u32,
    /// Log-transformed land size.
    pub landsize_log: f64,
    /// Suburb name.
    pub suburb: String,
    /// Dwelling type code (`h`, `u`, `t`, ...).
    pub property_type: String,
    /// Sale method code (`S`, `SP`, ...).
    pub method: String,
    /// Metropolitan region name.
    pub region: String,
}

impl PropertyRecord {
    /// Expand the record into labeled numeric columns.
    ///
    /// Numeric fields pass through under their training column names; each
    /// categorical field contributes a single `<field>_<value>` indicator
    /// column with value 1.0.
    pub fn expand(&self) -> BTreeMap<String, f64> {
        let mut columns = BTreeMap::new();
        columns.insert(COL_ROOMS.to_string(), f64::from(self.rooms));
        columns.insert(COL_DISTANCE.to_string(), self.distance);
        columns.insert(COL_BEDROOMS.to_string(), f64::from(self.bedrooms));
        columns.insert(COL_BATHROOMS.to_string(), f64::from(self.bathrooms));
        columns.insert(COL_CAR.to_string(), f64::from(self.car_spots));
        columns.insert(
            COL_PROPERTY_COUNT.to_string(),
            f64::from(self.property_count),
        );
        columns.insert(COL_AGE.to_string(), f64::from(self.age));
        columns.insert(COL_LANDSIZE_LOG.to_string(), self.landsize_log);
        for (field, value) in self.categorical_values() {
            columns.insert(indicator_name(field, value), 1.0);
        }
        columns
    }

    /// Align the expanded record against the model's expected columns.
    pub fn align(&self, model_columns: &[String]) -> Array1<f64> {
        align_columns(&self.expand(), model_columns)
    }

    /// Indicator names this record would contribute that the model does not
    /// expect. Values selected here were never seen during training and end
    /// up as zero signal after alignment.
    pub fn unmatched_indicators(&self, model_columns: &[String]) -> Vec<String> {
        self.categorical_values()
            .into_iter()
            .map(|(field, value)| indicator_name(field, value))
            .filter(|name| !model_columns.iter().any(|column| column == name))
            .collect()
    }

    fn categorical_values(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_SUBURB, self.suburb.as_str()),
            (FIELD_TYPE, self.property_type.as_str()),
            (FIELD_METHOD, self.method.as_str()),
            (FIELD_REGION, self.region.as_str()),
        ]
    }
}

/// Deterministic indicator column name for a categorical value.
pub fn indicator_name(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

/// Reindex labeled columns against the model's expected schema.
///
/// Expected columns absent from `columns` are filled with 0.0; columns the
/// model does not expect are dropped. Output order follows `model_columns`
/// exactly, so the operation is idempotent over already-aligned data.
pub fn align_columns(columns: &BTreeMap<String, f64>, model_columns: &[String]) -> Array1<f64> {
    Array1::from_iter(
        model_columns
            .iter()
            .map(|name| columns.get(name).copied().unwrap_or(0.0)),
    )
}
