#![deny(missing_docs)]

//! Entry point for the egui-based house price predictor UI.

use std::path::Path;

use eframe::egui;
use propval::assets::{self, AssetBundle};
use propval::egui_app::ui::{MIN_VIEWPORT_SIZE, PredictorApp};
use propval::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    // One-time load; the bundle lives for the rest of the process.
    let assets = assets::load_cached(Path::new("."));
    if let Err(err) = &assets {
        tracing::error!(%err, "startup halted: model assets unavailable");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1020.0, 680.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Melbourne House Price Predictor",
        native_options,
        Box::new(move |_cc| match assets {
            Ok(bundle) => Ok(Box::new(PredictorApp::new(bundle))),
            Err(err) => Ok(Box::new(MissingAssets {
                message: err.to_string(),
            })),
        }),
    )?;
    Ok(())
}

/// Fallback app shown when the model assets cannot be loaded; renders the
/// error banner and nothing else.
struct MissingAssets {
    message: String,
}

impl eframe::App for MissingAssets {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.heading("Model assets not found");
                ui.add_space(8.0);
                ui.label(&self.message);
                ui.label(AssetBundle::placement_hint());
            });
        });
    }
}
