//! # Shared Modal Utilities
//!
//! Common overlay rendering used by every modal: a darkened backdrop over the
//! whole window with a centered white dialog frame on top.

use eframe::egui;

/// Draw the modal backdrop and centered dialog frame; the dialog body is
/// rendered by `add_contents`.
pub fn modal_overlay(
    ctx: &egui::Context,
    id: &str,
    size: egui::Vec2,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    // Use Area with Foreground order to ensure it appears above everything
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            // Dark semi-transparent background
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            // Center the dialog content
            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(&ui.style())
                        .fill(egui::Color32::WHITE)
                        .rounding(egui::Rounding::same(10.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_size(size);
                            ui.set_max_size(size);
                            add_contents(ui);
                        });
                });
            });
        });
}
