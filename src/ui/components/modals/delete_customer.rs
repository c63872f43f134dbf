//! # Delete Customer Modal
//!
//! Last-name prompt for the delete flow. Confirming issues the delete
//! immediately; the first matching record is removed.

use eframe::egui;

use crate::ui::app_state::CustomerManagerApp;
use crate::ui::components::modals::shared::modal_overlay;
use crate::ui::components::theme::colors;

impl CustomerManagerApp {
    /// Render the delete dialog if it is open
    pub fn render_delete_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_delete_modal {
            return;
        }

        modal_overlay(
            ctx,
            "delete_customer_modal_overlay",
            egui::vec2(380.0, 180.0),
            |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);

                    ui.label(
                        egui::RichText::new("Delete customer")
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );

                    ui.add_space(12.0);

                    ui.label("Enter the last name to delete:");
                    ui.add_space(6.0);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.modals.delete_input)
                            .desired_width(280.0),
                    );

                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        ui.add_space(60.0);

                        if ui
                            .add(egui::Button::new("Cancel").min_size(egui::vec2(110.0, 30.0)))
                            .clicked()
                        {
                            self.modals.show_delete_modal = false;
                            self.modals.delete_input.clear();
                        }

                        ui.add_space(10.0);

                        let delete_button = egui::Button::new(
                            egui::RichText::new("Delete").color(colors::TEXT_WHITE),
                        )
                        .fill(colors::DANGER_FILL)
                        .min_size(egui::vec2(110.0, 30.0));

                        if ui.add(delete_button).clicked() {
                            self.submit_delete_customer();
                        }
                    });
                });
            },
        );
    }
}
