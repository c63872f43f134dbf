//! # Clear Table Confirmation Modal
//!
//! Yes/no confirmation gating the clear flow. Confirming wipes the whole
//! collection; there is no undo.

use eframe::egui;

use crate::ui::app_state::CustomerManagerApp;
use crate::ui::components::modals::shared::modal_overlay;
use crate::ui::components::theme::colors;

impl CustomerManagerApp {
    /// Render the clear-table confirmation if it is open
    pub fn render_clear_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_clear_confirm_modal {
            return;
        }

        modal_overlay(
            ctx,
            "clear_confirm_modal_overlay",
            egui::vec2(380.0, 150.0),
            |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);

                    ui.label(
                        egui::RichText::new("Clear table")
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );

                    ui.add_space(12.0);

                    ui.label("Are you sure you want to clear the table?");

                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        ui.add_space(60.0);

                        if ui
                            .add(egui::Button::new("No").min_size(egui::vec2(110.0, 30.0)))
                            .clicked()
                        {
                            self.modals.show_clear_confirm_modal = false;
                        }

                        ui.add_space(10.0);

                        let yes_button = egui::Button::new(
                            egui::RichText::new("Yes, clear it").color(colors::TEXT_WHITE),
                        )
                        .fill(colors::DANGER_FILL)
                        .min_size(egui::vec2(110.0, 30.0));

                        if ui.add(yes_button).clicked() {
                            self.submit_clear_customers();
                        }
                    });
                });
            },
        );
    }
}
