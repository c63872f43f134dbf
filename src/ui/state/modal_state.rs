//! # Modal State Module
//!
//! This module contains all state related to modal dialogs and their
//! visibility: the two-stage update flow, the delete prompt, and the clear
//! confirmation. Centralizing it here keeps the dialogs from stepping on
//! each other.

use crate::backend::domain::models::customer::Customer;

/// Stages of the update dialog flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStage {
    /// Prompt for the last name to look up
    Search,
    /// Edit the fields of the found customer
    Edit,
}

/// Editable customer form used by the update dialog's edit stage
#[derive(Debug, Clone)]
pub struct CustomerFormState {
    pub id: String,
    pub last_name: String,
    pub district: String,
    pub discount: String,
}

impl CustomerFormState {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            last_name: String::new(),
            district: String::new(),
            discount: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.last_name.clear();
        self.district.clear();
        self.discount.clear();
    }

    /// Pre-fill the form from a found customer
    pub fn populate_from_customer(&mut self, customer: &Customer) {
        self.id = customer.id.clone();
        self.last_name = customer.last_name.clone();
        self.district = customer.district.clone();
        self.discount = customer.discount.to_string();
    }
}

/// Modal visibility and modal-specific state
#[derive(Debug)]
pub struct ModalState {
    /// Whether the update dialog is visible
    pub show_update_modal: bool,

    /// Whether the delete dialog is visible
    pub show_delete_modal: bool,

    /// Whether the clear-table confirmation is visible
    pub show_clear_confirm_modal: bool,

    /// Current stage of the update flow
    pub update_stage: UpdateStage,

    /// Search field contents in the update dialog's search stage
    pub update_search_input: String,

    /// The last name the search stage matched on; the update write targets
    /// this name even if the operator edits the last-name field afterwards
    pub update_search_name: String,

    /// Edit-stage form, pre-filled from the found customer
    pub update_form: CustomerFormState,

    /// Search field contents in the delete dialog
    pub delete_input: String,
}

impl ModalState {
    /// Create new modal state with all modals hidden
    pub fn new() -> Self {
        Self {
            show_update_modal: false,
            show_delete_modal: false,
            show_clear_confirm_modal: false,
            update_stage: UpdateStage::Search,
            update_search_input: String::new(),
            update_search_name: String::new(),
            update_form: CustomerFormState::new(),
            delete_input: String::new(),
        }
    }

    /// Hide all modals
    pub fn hide_all_modals(&mut self) {
        self.show_update_modal = false;
        self.show_delete_modal = false;
        self.show_clear_confirm_modal = false;
    }

    /// Reset the update flow back to a blank search stage
    pub fn reset_update_flow(&mut self) {
        self.update_stage = UpdateStage::Search;
        self.update_search_input.clear();
        self.update_search_name.clear();
        self.update_form.clear();
    }
}
