//! Inference entry point and currency formatting.

use crate::features::PropertyRecord;
use crate::model::PriceModel;

/// Outcome of one inference pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePrediction {
    /// Raw model output in `ln(1 + price)` units.
    pub log_price: f64,
    /// Price in AUD after the `expm1` inverse transform.
    pub price_aud: f64,
}

impl PricePrediction {
    /// Banner text shown after a successful prediction.
    pub fn headline(&self) -> String {
        format!("Estimated Property Price: {}", format_aud(self.price_aud))
    }
}

/// Align one record against the model schema and predict its sale price.
///
/// The model predicts in log-price space; the inverse transform recovers
/// the price in original units.
pub fn predict_price(
    model: &PriceModel,
    model_columns: &[String],
    record: &PropertyRecord,
) -> PricePrediction {
    let row = record.align(model_columns);
    let log_price = model.predict(row.view());
    PricePrediction {
        log_price,
        price_aud: log_price.exp_m1(),
    }
}

/// Format a price as `$<value> AUD` with thousands separators and no
/// decimal places.
pub fn format_aud(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${grouped} AUD")
}
