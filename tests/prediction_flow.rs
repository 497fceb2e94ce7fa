//! End-to-end flow: load assets from disk, assemble a record from form
//! state, align it against the model schema and predict a price.

use std::fs;
use std::path::Path;

use propval::assets::{APP_DATA_FILE, AssetBundle, AssetError, MODEL_COLUMNS_FILE, MODEL_FILE};
use propval::egui_app::state::FormState;
use propval::pricing::{self, format_aud};
use serde_json::json;
use tempfile::TempDir;

/// Columns in training order: the eight numeric columns followed by the
/// indicator expansion of a two-suburb, one-region, two-type, two-method
/// vocabulary.
const MODEL_COLUMNS: &[&str] = &[
    "Rooms",
    "Distance",
    "Bedroom2",
    "Bathroom",
    "Car",
    "Propertycount",
    "Age",
    "Landsize_log",
    "Suburb_Abbotsford",
    "Suburb_Richmond",
    "Regionname_Southern Metropolitan",
    "Type_h",
    "Type_u",
    "Method_S",
    "Method_SP",
];

fn write_assets(dir: &Path) {
    // Coefficients chosen so the scenario below lands on a plausible
    // Melbourne log-price.
    let coefficients: Vec<f64> = MODEL_COLUMNS
        .iter()
        .map(|column| match *column {
            "Rooms" => 0.08,
            "Distance" => -0.02,
            "Bedroom2" => 0.01,
            "Bathroom" => 0.05,
            "Car" => 0.03,
            "Propertycount" => 0.00001,
            "Age" => 0.002,
            "Landsize_log" => 0.05,
            "Suburb_Richmond" => 0.2,
            "Regionname_Southern Metropolitan" => 0.15,
            "Type_h" => 0.25,
            "Method_S" => 0.02,
            _ => 0.0,
        })
        .collect();
    let model = json!({
        "model_version": 1,
        "target": "Price_log",
        "intercept": 12.8,
        "coefficients": coefficients,
    });
    let app_data = json!({
        "categorical_cols": {
            "Suburb": ["Richmond", "Abbotsford"],
            "Regionname": ["Southern Metropolitan"],
            "Type": ["u", "h"],
            "Method": ["SP", "S"],
        }
    });
    fs::write(dir.join(MODEL_FILE), model.to_string()).expect("write model");
    fs::write(
        dir.join(MODEL_COLUMNS_FILE),
        json!(MODEL_COLUMNS).to_string(),
    )
    .expect("write columns");
    fs::write(dir.join(APP_DATA_FILE), app_data.to_string()).expect("write app data");
}

fn scenario_form(bundle: &AssetBundle) -> FormState {
    let mut form = FormState::new(bundle);
    form.rooms = 3;
    form.bedrooms = 3;
    form.bathrooms = 1;
    form.car_spots = 1;
    form.age = 25;
    form.land_size_sqm = 500;
    form.distance_km = 10.0;
    form.property_count = 7500;
    form.suburb = "Richmond".to_string();
    form.region = "Southern Metropolitan".to_string();
    form.property_type = "h".to_string();
    form.method = "S".to_string();
    form
}

#[test]
fn scenario_prediction_matches_the_hand_computed_price() {
    let temp = TempDir::new().expect("create tempdir");
    write_assets(temp.path());
    let bundle = AssetBundle::load(temp.path()).expect("load assets");

    let record = scenario_form(&bundle).record();
    let row = record.align(&bundle.model_columns);
    assert_eq!(row.len(), MODEL_COLUMNS.len());

    let landsize_log = 500.0_f64.ln_1p();
    assert!((landsize_log - 6.2166).abs() < 1e-4);
    let expected_log = 12.8
        + 0.08 * 3.0
        + -0.02 * 10.0
        + 0.01 * 3.0
        + 0.05 * 1.0
        + 0.03 * 1.0
        + 0.00001 * 7500.0
        + 0.002 * 25.0
        + 0.05 * landsize_log
        + 0.2
        + 0.15
        + 0.25
        + 0.02;

    let prediction = pricing::predict_price(&bundle.model, &bundle.model_columns, &record);
    assert!((prediction.log_price - expected_log).abs() < 1e-9);
    assert!((prediction.price_aud - expected_log.exp_m1()).abs() < 1e-3);
    assert_eq!(
        prediction.headline(),
        format!(
            "Estimated Property Price: {}",
            format_aud(expected_log.exp_m1())
        )
    );
}

#[test]
fn unseen_suburb_attenuates_instead_of_failing() {
    let temp = TempDir::new().expect("create tempdir");
    write_assets(temp.path());
    let bundle = AssetBundle::load(temp.path()).expect("load assets");

    let mut seen = scenario_form(&bundle);
    let mut unseen = seen.clone();
    seen.suburb = "Richmond".to_string();
    unseen.suburb = "Atlantis".to_string();

    let seen_prediction =
        pricing::predict_price(&bundle.model, &bundle.model_columns, &seen.record());
    let unseen_prediction =
        pricing::predict_price(&bundle.model, &bundle.model_columns, &unseen.record());

    // Same record minus the suburb coefficient: the unknown value drops
    // exactly that contribution.
    let delta = seen_prediction.log_price - unseen_prediction.log_price;
    assert!((delta - 0.2).abs() < 1e-9);
}

#[test]
fn dropdowns_are_populated_sorted_from_app_data() {
    let temp = TempDir::new().expect("create tempdir");
    write_assets(temp.path());
    let bundle = AssetBundle::load(temp.path()).expect("load assets");

    assert_eq!(
        bundle.app_data.choices("Suburb"),
        ["Abbotsford", "Richmond"]
    );
    assert_eq!(bundle.app_data.choices("Type"), ["h", "u"]);
    assert_eq!(bundle.app_data.choices("Method"), ["S", "SP"]);

    let form = FormState::new(&bundle);
    assert_eq!(form.suburb, "Abbotsford");
    assert_eq!(form.property_type, "h");
}

#[test]
fn deleting_any_asset_blocks_the_load() {
    for missing in [MODEL_FILE, MODEL_COLUMNS_FILE, APP_DATA_FILE] {
        let temp = TempDir::new().expect("create tempdir");
        write_assets(temp.path());
        fs::remove_file(temp.path().join(missing)).expect("remove asset");

        match AssetBundle::load(temp.path()) {
            Err(AssetError::MissingAsset { path }) => {
                assert!(path.ends_with(missing));
            }
            other => panic!("expected MissingAsset for {missing}, got {other:?}"),
        }
    }
}
