//! # App Coordinator Module
//!
//! This module contains the main application coordination logic: the
//! `eframe::App` update loop tying together the input panel, the customer
//! table, the message area, and the modal dialogs.
//!
//! ## Application Flow:
//! 1. Handle global input (Escape closes any open modal)
//! 2. Load the table on first run
//! 3. Render the input panel and table
//! 4. Render any active modal on top

use eframe::egui;

use crate::ui::app_state::CustomerManagerApp;
use crate::ui::components::customer_table::render_customer_table;

/// How long success/error messages stay up before fading
const MESSAGE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

impl eframe::App for CustomerManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Escape closes any open modal; cancellation only ever happens before
        // the storage call is issued
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modals.hide_all_modals();
            self.modals.reset_update_flow();
        }

        // Load initial data on first run
        if self.loading {
            self.reload_customers();
        }

        // Let messages fade after a delay
        if self.error_message.is_some() || self.success_message.is_some() {
            let since = *self
                .message_since
                .get_or_insert_with(std::time::Instant::now);
            if since.elapsed() >= MESSAGE_TIMEOUT {
                self.clear_messages();
            } else {
                ctx.request_repaint_after(MESSAGE_TIMEOUT - since.elapsed());
            }
        }

        egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
            self.render_input_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                render_customer_table(ui, &self.customers);
            });
        });

        // Render modals
        self.render_update_modal(ctx);
        self.render_delete_modal(ctx);
        self.render_clear_confirm_modal(ctx);
    }
}
