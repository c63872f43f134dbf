//! Shared colors for the customer manager interface

pub mod colors {
    use eframe::egui::Color32;

    pub const HEADER_BACKGROUND: Color32 = Color32::from_rgb(96, 108, 188);
    pub const TEXT_WHITE: Color32 = Color32::WHITE;
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(60, 60, 60);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(80, 80, 80);

    pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(34, 139, 34);
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 50, 50);

    /// Fill for the destructive confirm buttons (delete, clear table)
    pub const DANGER_FILL: Color32 = Color32::from_rgb(220, 20, 60);
}
