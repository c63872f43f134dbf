use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::CustomerManagerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Customer Manager application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Customer Manager")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Customer Manager",
        options,
        Box::new(|cc| {
            match CustomerManagerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Customer Manager app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    // Opening the data directory is the only thing that can fail here
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
