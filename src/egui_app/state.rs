//! Shared state types for the egui UI.

use crate::assets::AssetBundle;
use crate::features::{FIELD_METHOD, FIELD_REGION, FIELD_SUBURB, FIELD_TYPE, PropertyRecord};

/// Widget-bound values for the twelve property attributes.
///
/// Numeric fields hold the raw widget values; land size stays in square
/// meters here so the drag value displays naturally, and the `ln(1 + x)`
/// transform the model was trained on is applied when snapshotting a record.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    /// Total number of rooms, 1-16.
    pub rooms: u32,
    /// Number of bedrooms, 1-30.
    pub bedrooms: u32,
    /// Number of bathrooms, 1-12.
    pub bathrooms: u32,
    /// Number of car spots, 0-26.
    pub car_spots: u32,
    /// Property age in years, 0-200.
    pub age: u32,
    /// Land size in square meters, 0-50000.
    pub land_size_sqm: u32,
    /// Distance from the CBD in km, 0.0-50.0.
    pub distance_km: f64,
    /// Number of properties in the suburb, unbounded above.
    pub property_count: u32,
    /// Selected suburb.
    pub suburb: String,
    /// Selected region name.
    pub region: String,
    /// Selected dwelling type code.
    pub property_type: String,
    /// Selected sale method code.
    pub method: String,
}

impl FormState {
    /// Initial form values; categoricals default to the first entry of each
    /// sorted vocabulary, matching how the dropdowns open.
    pub fn new(assets: &AssetBundle) -> Self {
        let first = |field: &str| {
            assets
                .app_data
                .choices(field)
                .first()
                .cloned()
                .unwrap_or_default()
        };
        Self {
            rooms: 3,
            bedrooms: 3,
            bathrooms: 1,
            car_spots: 1,
            age: 25,
            land_size_sqm: 500,
            distance_km: 10.0,
            property_count: 7500,
            suburb: first(FIELD_SUBURB),
            region: first(FIELD_REGION),
            property_type: first(FIELD_TYPE),
            method: first(FIELD_METHOD),
        }
    }

    /// Snapshot the current widget values into a prediction record.
    pub fn record(&self) -> PropertyRecord {
        PropertyRecord {
            rooms: self.rooms,
            distance: self.distance_km,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            car_spots: self.car_spots,
            property_count: self.property_count,
            age: self.age,
            landsize_log: f64::from(self.land_size_sqm).ln_1p(),
            suburb: self.suburb.clone(),
            property_type: self.property_type.clone(),
            method: self.method.clone(),
            region: self.region.clone(),
        }
    }
}

/// Success banner shown after a prediction completes.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionBanner {
    /// Formatted estimate, e.g. `Estimated Property Price: $1,234,567 AUD`.
    pub headline: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AppData;
    use crate::model::PriceModel;
    use std::collections::BTreeMap;

    fn bundle() -> AssetBundle {
        let mut categorical_cols = BTreeMap::new();
        categorical_cols.insert(
            "Suburb".to_string(),
            vec!["Abbotsford".to_string(), "Richmond".to_string()],
        );
        categorical_cols.insert(
            "Regionname".to_string(),
            vec!["Northern Metropolitan".to_string()],
        );
        categorical_cols.insert("Type".to_string(), vec!["h".to_string(), "u".to_string()]);
        categorical_cols.insert("Method".to_string(), vec!["S".to_string()]);
        AssetBundle {
            model: PriceModel {
                model_version: 1,
                target: "Price_log".into(),
                intercept: 0.0,
                coefficients: vec![0.0],
            },
            model_columns: vec!["Rooms".to_string()],
            app_data: AppData { categorical_cols },
        }
    }

    #[test]
    fn defaults_match_the_form_ranges() {
        let form = FormState::new(&bundle());
        assert_eq!(form.rooms, 3);
        assert_eq!(form.bedrooms, 3);
        assert_eq!(form.bathrooms, 1);
        assert_eq!(form.car_spots, 1);
        assert_eq!(form.age, 25);
        assert_eq!(form.land_size_sqm, 500);
        assert_eq!(form.distance_km, 10.0);
        assert_eq!(form.property_count, 7500);
    }

    #[test]
    fn categoricals_default_to_first_sorted_choice() {
        let form = FormState::new(&bundle());
        assert_eq!(form.suburb, "Abbotsford");
        assert_eq!(form.region, "Northern Metropolitan");
        assert_eq!(form.property_type, "h");
        assert_eq!(form.method, "S");
    }

    #[test]
    fn record_applies_the_land_size_transform() {
        let mut form = FormState::new(&bundle());
        form.land_size_sqm = 500;
        let record = form.record();
        assert!((record.landsize_log - 500.0_f64.ln_1p()).abs() < 1e-12);
        assert_eq!(record.rooms, form.rooms);
        assert_eq!(record.distance, form.distance_km);
        assert_eq!(record.property_count, form.property_count);
    }
}
