//! Bridges form state to the inference pipeline for the egui renderer.

use crate::assets::AssetBundle;
use crate::egui_app::state::{FormState, PredictionBanner};
use crate::pricing;

/// Maintains form state and runs predictions for the egui UI.
///
/// The asset bundle is the process-wide cache established at startup; the
/// controller never reloads or mutates it.
pub struct PredictorController {
    assets: &'static AssetBundle,
    /// Current widget values.
    pub form: FormState,
    /// Banner from the most recent prediction, if any.
    pub banner: Option<PredictionBanner>,
}

impl PredictorController {
    /// Create a controller with the form at its default values.
    pub fn new(assets: &'static AssetBundle) -> Self {
        Self {
            assets,
            form: FormState::new(assets),
            banner: None,
        }
    }

    /// Dropdown choices for a categorical field, sorted at load.
    pub fn choices(&self, field: &str) -> &[String] {
        self.assets.app_data.choices(field)
    }

    /// Run one synchronous inference pass over the current form values.
    ///
    /// Assembles a fresh record, aligns it against the model schema, invokes
    /// the model and stores the formatted result for the renderer.
    pub fn predict(&mut self) {
        let record = self.form.record();
        let unmatched = record.unmatched_indicators(&self.assets.model_columns);
        if !unmatched.is_empty() {
            tracing::debug!(
                ?unmatched,
                "selected categories unseen at training time; they contribute zero signal"
            );
        }
        let prediction =
            pricing::predict_price(&self.assets.model, &self.assets.model_columns, &record);
        tracing::info!(
            log_price = prediction.log_price,
            price_aud = prediction.price_aud,
            suburb = %record.suburb,
            "prediction complete"
        );
        self.banner = Some(PredictionBanner {
            headline: prediction.headline(),
        });
    }
}
