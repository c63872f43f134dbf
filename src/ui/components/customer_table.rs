use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::backend::domain::models::customer::Customer;
use crate::ui::components::theme::colors;

/// Render the customer table
pub fn render_customer_table(ui: &mut egui::Ui, customers: &[Customer]) {
    if customers.is_empty() {
        ui.label("No customers yet");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(160.0)) // IDENTIFIER column
        .column(Column::exact(200.0)) // LAST NAME column
        .column(Column::exact(200.0)) // DISTRICT column
        .column(Column::exact(120.0)) // DISCOUNT column
        .header(32.0, |mut header| {
            for title in ["Identifier", "Last name", "District", "Discount (%)"] {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    ui.painter()
                        .rect_filled(rect, egui::Rounding::ZERO, colors::HEADER_BACKGROUND);

                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.colored_label(
                                colors::TEXT_WHITE,
                                egui::RichText::new(title)
                                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                    .strong(),
                            );
                        },
                    );
                });
            }
        })
        .body(|mut body| {
            for customer in customers {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.add_space(8.0);
                        ui.label(&customer.id);
                    });
                    row.col(|ui| {
                        ui.add_space(8.0);
                        ui.label(&customer.last_name);
                    });
                    row.col(|ui| {
                        ui.add_space(8.0);
                        ui.label(&customer.district);
                    });
                    row.col(|ui| {
                        ui.add_space(8.0);
                        ui.label(customer.discount.to_string());
                    });
                });
            }
        });
}
