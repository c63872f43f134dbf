//! # Update Customer Modal
//!
//! Two-stage dialog driving the update flow: first a search prompt for the
//! last name to look up, then an edit form pre-filled with the found record.
//! The write targets the original search name even if the operator edits the
//! last-name field in the second stage.

use eframe::egui;

use crate::ui::app_state::CustomerManagerApp;
use crate::ui::components::modals::shared::modal_overlay;
use crate::ui::components::theme::colors;
use crate::ui::state::modal_state::UpdateStage;

impl CustomerManagerApp {
    /// Render the update dialog if it is open
    pub fn render_update_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_update_modal {
            return;
        }

        match self.modals.update_stage {
            UpdateStage::Search => {
                modal_overlay(
                    ctx,
                    "update_search_modal_overlay",
                    egui::vec2(380.0, 180.0),
                    |ui| self.render_update_search_stage(ui),
                );
            }
            UpdateStage::Edit => {
                modal_overlay(
                    ctx,
                    "update_edit_modal_overlay",
                    egui::vec2(420.0, 290.0),
                    |ui| self.render_update_edit_stage(ui),
                );
            }
        }
    }

    fn render_update_search_stage(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new("Find customer")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );

            ui.add_space(12.0);

            ui.label("Enter the last name to search for:");
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.modals.update_search_input)
                    .desired_width(280.0),
            );

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.add_space(60.0);

                if ui
                    .add(egui::Button::new("Cancel").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.modals.show_update_modal = false;
                    self.modals.reset_update_flow();
                }

                ui.add_space(10.0);

                if ui
                    .add(egui::Button::new("Search").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.submit_update_search();
                }
            });
        });
    }

    fn render_update_edit_stage(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);

            ui.label(
                egui::RichText::new("Update customer")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );

            ui.add_space(4.0);

            ui.label(
                egui::RichText::new(format!(
                    "Editing the record matched by \"{}\"",
                    self.modals.update_search_name
                ))
                .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(12.0);

            egui::Grid::new("update_customer_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Identifier:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.modals.update_form.id)
                            .desired_width(240.0),
                    );
                    ui.end_row();

                    ui.label("Last name:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.modals.update_form.last_name)
                            .desired_width(240.0),
                    );
                    ui.end_row();

                    ui.label("District:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.modals.update_form.district)
                            .desired_width(240.0),
                    );
                    ui.end_row();

                    ui.label("Discount (%):");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.modals.update_form.discount)
                            .desired_width(240.0),
                    );
                    ui.end_row();
                });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.add_space(80.0);

                if ui
                    .add(egui::Button::new("Cancel").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.modals.show_update_modal = false;
                    self.modals.reset_update_flow();
                }

                ui.add_space(10.0);

                if ui
                    .add(egui::Button::new("Save").min_size(egui::vec2(110.0, 30.0)))
                    .clicked()
                {
                    self.submit_update_customer();
                }
            });
        });
    }
}
