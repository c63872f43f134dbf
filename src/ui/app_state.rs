//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the customer manager app.
//!
//! ## Purpose:
//! The CustomerManagerApp struct holds all application state in one place:
//! - Backend connection and data access
//! - The current table snapshot (discarded and rebuilt after every write)
//! - UI state (loading flag, messages, input panel fields)
//! - Modal state
//!
//! This follows the single source of truth principle for state management.

use eframe::egui;
use log::info;

use crate::backend::domain::models::customer::Customer;
use crate::backend::Backend;
use crate::ui::state::modal_state::ModalState;

/// Main application struct for the egui customer manager
pub struct CustomerManagerApp {
    pub backend: Backend,

    /// In-memory snapshot of the customer table, rebuilt from storage after
    /// every successful write
    pub customers: Vec<Customer>,

    // UI state
    pub loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// When the currently shown message first appeared
    pub message_since: Option<std::time::Instant>,

    // Input panel form state
    pub id_field: String,
    pub last_name_field: String,
    pub district_field: String,
    pub discount_field: String,

    // Modal states
    pub modals: ModalState,
}

impl CustomerManagerApp {
    /// Create a new CustomerManagerApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing CustomerManagerApp");

        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let backend = Backend::new()?;

        Ok(Self {
            backend,

            customers: Vec::new(),

            // UI state
            loading: true,
            error_message: None,
            success_message: None,
            message_since: None,

            // Form states
            id_field: String::new(),
            last_name_field: String::new(),
            district_field: String::new(),
            discount_field: String::new(),

            // Modal states
            modals: ModalState::new(),
        })
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_since = None;
    }
}
