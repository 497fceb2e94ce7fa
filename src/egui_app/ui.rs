//! egui renderer for the predictor form.

use eframe::egui::{self, Frame, Margin, RichText, SliderClamping, Stroke, Ui};

use crate::assets::AssetBundle;
use crate::egui_app::controller::PredictorController;
use crate::egui_app::state::PredictionBanner;
use crate::egui_app::style;
use crate::features::{FIELD_METHOD, FIELD_REGION, FIELD_SUBURB, FIELD_TYPE};

/// Minimum usable window size for the two-panel form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);

/// Renders the predictor form using the shared controller state.
pub struct PredictorApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl PredictorApp {
    /// Create the app over the process-wide asset cache.
    pub fn new(assets: &'static AssetBundle) -> Self {
        Self {
            controller: PredictorController::new(assets),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.heading("Melbourne House Price Predictor");
                ui.label(
                    RichText::new(
                        "Enter the details of a property to get an estimated market value \
                         based on historical data.",
                    )
                    .color(palette.text_muted),
                );
            });
    }

    fn render_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(style::palette().bg_secondary)
                    .inner_margin(Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    self.render_property_panel(&mut columns[0]);
                    self.render_location_panel(&mut columns[1]);
                });
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);
                let button = egui::Button::new(RichText::new("Predict Price").strong());
                if ui
                    .add_sized(egui::vec2(ui.available_width(), 32.0), button)
                    .clicked()
                {
                    self.controller.predict();
                }
                if let Some(banner) = self.controller.banner.clone() {
                    self.render_banner(ui, &banner);
                }
            });
    }

    fn render_property_panel(&mut self, ui: &mut Ui) {
        section_label(ui, "Property Features");
        let form = &mut self.controller.form;
        ui.add(
            egui::Slider::new(&mut form.rooms, 1..=16)
                .text("Rooms")
                .clamping(SliderClamping::Always),
        )
        .on_hover_text("Total number of rooms.");
        ui.add(
            egui::Slider::new(&mut form.bedrooms, 1..=30)
                .text("Bedrooms")
                .clamping(SliderClamping::Always),
        )
        .on_hover_text("Number of bedrooms.");
        ui.add(
            egui::Slider::new(&mut form.bathrooms, 1..=12)
                .text("Bathrooms")
                .clamping(SliderClamping::Always),
        )
        .on_hover_text("Number of bathrooms.");
        ui.add(
            egui::Slider::new(&mut form.car_spots, 0..=26)
                .text("Car Spots")
                .clamping(SliderClamping::Always),
        )
        .on_hover_text("Number of car parking spots.");
        ui.add_space(8.0);
        labeled_drag(
            ui,
            "Property Age (Years)",
            egui::DragValue::new(&mut form.age).range(0..=200).suffix(" years"),
            "Calculated as 2024 - YearBuilt.",
        );
        labeled_drag(
            ui,
            "Land Size (sqm)",
            egui::DragValue::new(&mut form.land_size_sqm)
                .range(0..=50_000)
                .suffix(" sqm"),
            "The land area in square meters.",
        );
    }

    fn render_location_panel(&mut self, ui: &mut Ui) {
        section_label(ui, "Location & Sale Details");
        let suburbs = self.controller.choices(FIELD_SUBURB).to_vec();
        vocab_combo(
            ui,
            "suburb_combo",
            "Suburb",
            &suburbs,
            &mut self.controller.form.suburb,
            None,
        );
        let regions = self.controller.choices(FIELD_REGION).to_vec();
        vocab_combo(
            ui,
            "region_combo",
            "Region",
            &regions,
            &mut self.controller.form.region,
            None,
        );
        let types = self.controller.choices(FIELD_TYPE).to_vec();
        vocab_combo(
            ui,
            "type_combo",
            "Type",
            &types,
            &mut self.controller.form.property_type,
            Some("h: house, u: unit, t: townhouse"),
        );
        let methods = self.controller.choices(FIELD_METHOD).to_vec();
        vocab_combo(
            ui,
            "method_combo",
            "Sale Method",
            &methods,
            &mut self.controller.form.method,
            Some("S: sold, SP: sold prior, PI: passed in, VB: vendor bid"),
        );
        ui.add_space(8.0);
        ui.add(
            egui::Slider::new(&mut self.controller.form.distance_km, 0.0..=50.0)
                .text("Distance from CBD (km)")
                .clamping(SliderClamping::Always),
        )
        .on_hover_text("Distance from Melbourne's Central Business District.");
        labeled_drag(
            ui,
            "Property Count in Suburb",
            egui::DragValue::new(&mut self.controller.form.property_count),
            "Number of properties in the suburb.",
        );
    }

    fn render_banner(&self, ui: &mut Ui, banner: &PredictionBanner) {
        let palette = style::palette();
        ui.add_space(12.0);
        Frame::new()
            .fill(palette.success_bg)
            .stroke(Stroke::new(1.0, palette.success))
            .corner_radius(4.0)
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(&banner.headline)
                        .color(palette.success)
                        .strong()
                        .size(18.0),
                );
            });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_header(ctx);
        self.render_form(ctx);
    }
}

fn section_label(ui: &mut Ui, text: &str) {
    let palette = style::palette();
    ui.label(RichText::new(text).strong().color(palette.text_primary));
    ui.add_space(8.0);
}

fn labeled_drag(ui: &mut Ui, label: &str, drag: egui::DragValue<'_>, help: &str) {
    let palette = style::palette();
    ui.label(RichText::new(label).color(palette.text_muted));
    ui.add(drag).on_hover_text(help);
    ui.add_space(6.0);
}

fn vocab_combo(
    ui: &mut Ui,
    id_salt: &str,
    label: &str,
    choices: &[String],
    selected: &mut String,
    help: Option<&str>,
) {
    let palette = style::palette();
    ui.label(RichText::new(label).color(palette.text_muted));
    let response = egui::ComboBox::from_id_salt(id_salt)
        .width(260.0)
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for choice in choices {
                let is_selected = selected == choice;
                if ui.selectable_label(is_selected, choice).clicked() {
                    *selected = choice.clone();
                }
            }
        })
        .response;
    if let Some(help) = help {
        response.on_hover_text(help);
    }
    ui.add_space(6.0);
}
