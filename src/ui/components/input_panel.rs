//! # Input Panel Module
//!
//! This module renders the top panel of the main window: the application
//! title, the four labeled input fields, the four action buttons, and the
//! success/error message area.
//!
//! The Add button submits the panel fields directly; Update, Delete, and
//! Clear open their dialogs.

use eframe::egui;

use crate::ui::app_state::CustomerManagerApp;
use crate::ui::components::theme::colors;

impl CustomerManagerApp {
    /// Render the input panel: four labeled fields and the action buttons
    pub fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        ui.add(
            egui::Label::new(
                egui::RichText::new("Customer Manager")
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            )
            .selectable(false),
        );

        ui.add_space(8.0);

        egui::Grid::new("customer_input_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Identifier:");
                ui.add(egui::TextEdit::singleline(&mut self.id_field).desired_width(260.0));
                ui.end_row();

                ui.label("Last name:");
                ui.add(egui::TextEdit::singleline(&mut self.last_name_field).desired_width(260.0));
                ui.end_row();

                ui.label("District:");
                ui.add(egui::TextEdit::singleline(&mut self.district_field).desired_width(260.0));
                ui.end_row();

                ui.label("Discount (%):");
                ui.add(egui::TextEdit::singleline(&mut self.discount_field).desired_width(260.0));
                ui.end_row();
            });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new("Add").min_size(egui::vec2(90.0, 28.0)))
                .clicked()
            {
                self.submit_add_customer();
            }

            if ui
                .add(egui::Button::new("Update…").min_size(egui::vec2(90.0, 28.0)))
                .clicked()
            {
                self.clear_messages();
                self.modals.reset_update_flow();
                self.modals.show_update_modal = true;
            }

            if ui
                .add(egui::Button::new("Delete…").min_size(egui::vec2(90.0, 28.0)))
                .clicked()
            {
                self.clear_messages();
                self.modals.delete_input.clear();
                self.modals.show_delete_modal = true;
            }

            if ui
                .add(egui::Button::new("Clear table…").min_size(egui::vec2(110.0, 28.0)))
                .clicked()
            {
                self.clear_messages();
                self.modals.show_clear_confirm_modal = true;
            }
        });

        ui.add_space(8.0);
    }

    /// Success/error message area below the input panel
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.error_message.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(colors::ERROR_TEXT, message);
                if ui.small_button("✕").clicked() {
                    self.clear_messages();
                }
            });
        }

        if let Some(message) = self.success_message.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(colors::SUCCESS_TEXT, message);
                if ui.small_button("✕").clicked() {
                    self.clear_messages();
                }
            });
        }
    }
}
