//! # Data Loading Module
//!
//! This module holds the four user-triggered flows (add, update, delete,
//! clear) plus the table reload, bridging the UI and the backend service.
//!
//! ## Data Flow:
//! 1. A button or dialog confirm triggers a flow
//! 2. The flow builds a command from form state and calls the service
//! 3. The result value (or storage error) is mapped to message state
//! 4. On a successful write, the table snapshot is rebuilt from storage
//!
//! Every flow is a linear prompt -> validate -> call -> reload/report
//! sequence; nothing here is retried or run in the background.

use log::warn;

use crate::backend::domain::commands::customers::{
    AddCustomerCommand, AddCustomerResult, CustomerInput, DeleteCustomerCommand,
    DeleteCustomerResult, FindCustomerQuery, FindCustomerResult, UpdateCustomerCommand,
    UpdateCustomerResult,
};
use crate::ui::app_state::CustomerManagerApp;
use crate::ui::state::modal_state::UpdateStage;

impl CustomerManagerApp {
    /// Rebuild the table snapshot from storage
    pub fn reload_customers(&mut self) {
        match self.backend.customer_service.list_customers() {
            Ok(result) => {
                self.customers = result.customers;
                self.loading = false;
            }
            Err(e) => {
                warn!("Failed to load customers: {}", e);
                self.error_message = Some(format!("Failed to load customers: {}", e));
                self.loading = false;
            }
        }
    }

    /// Add flow: insert a customer from the input panel fields
    pub fn submit_add_customer(&mut self) {
        self.clear_messages();

        let command = AddCustomerCommand {
            input: CustomerInput {
                id: self.id_field.clone(),
                last_name: self.last_name_field.clone(),
                district: self.district_field.clone(),
                discount: self.discount_field.clone(),
            },
        };

        match self.backend.customer_service.add_customer(command) {
            Ok(AddCustomerResult::Added(_)) => {
                self.reload_customers();
            }
            Ok(AddCustomerResult::Invalid(e)) => {
                self.error_message = Some(e.to_string());
            }
            Err(e) => {
                warn!("Failed to add customer: {}", e);
                self.error_message = Some(format!("Failed to add customer: {}", e));
            }
        }
    }

    /// Update flow, search stage: look up the customer to edit and move the
    /// dialog to the edit stage
    pub fn submit_update_search(&mut self) {
        self.clear_messages();

        let query = FindCustomerQuery {
            last_name: self.modals.update_search_input.clone(),
        };

        match self.backend.customer_service.find_customer(query) {
            Ok(FindCustomerResult::Found(customer)) => {
                self.modals.update_search_name = self.modals.update_search_input.clone();
                self.modals.update_form.populate_from_customer(&customer);
                self.modals.update_stage = UpdateStage::Edit;
            }
            Ok(FindCustomerResult::NotFound) => {
                self.error_message = Some("Customer not found".to_string());
                self.close_update_modal();
            }
            Ok(FindCustomerResult::Invalid(e)) => {
                self.error_message = Some(e.to_string());
                self.close_update_modal();
            }
            Err(e) => {
                warn!("Failed to find customer: {}", e);
                self.error_message = Some(format!("Failed to find customer: {}", e));
                self.close_update_modal();
            }
        }
    }

    /// Update flow, edit stage: write the edited fields against the original
    /// search name
    pub fn submit_update_customer(&mut self) {
        self.clear_messages();

        let command = UpdateCustomerCommand {
            search_last_name: self.modals.update_search_name.clone(),
            input: CustomerInput {
                id: self.modals.update_form.id.clone(),
                last_name: self.modals.update_form.last_name.clone(),
                district: self.modals.update_form.district.clone(),
                discount: self.modals.update_form.discount.clone(),
            },
        };

        match self.backend.customer_service.update_customer(command) {
            Ok(UpdateCustomerResult::Updated(_)) => {
                self.close_update_modal();
                self.reload_customers();
            }
            Ok(UpdateCustomerResult::NotFound) => {
                self.error_message = Some("Customer not found".to_string());
                self.close_update_modal();
            }
            Ok(UpdateCustomerResult::Invalid(e)) => {
                self.error_message = Some(e.to_string());
                self.close_update_modal();
            }
            Err(e) => {
                warn!("Failed to update customer: {}", e);
                self.error_message = Some(format!("Failed to update customer: {}", e));
                self.close_update_modal();
            }
        }
    }

    /// Delete flow: remove the first customer with the entered last name
    pub fn submit_delete_customer(&mut self) {
        self.clear_messages();

        let command = DeleteCustomerCommand {
            last_name: self.modals.delete_input.clone(),
        };

        match self.backend.customer_service.delete_customer(command) {
            Ok(DeleteCustomerResult::Deleted) => {
                self.success_message = Some("Customer deleted".to_string());
                self.close_delete_modal();
                self.reload_customers();
            }
            Ok(DeleteCustomerResult::NotFound) => {
                self.error_message = Some("Customer not found".to_string());
                self.close_delete_modal();
            }
            Ok(DeleteCustomerResult::Invalid(e)) => {
                self.error_message = Some(e.to_string());
                self.close_delete_modal();
            }
            Err(e) => {
                warn!("Failed to delete customer: {}", e);
                self.error_message = Some(format!("Failed to delete customer: {}", e));
                self.close_delete_modal();
            }
        }
    }

    /// Clear flow: wipe the collection and empty the displayed table
    pub fn submit_clear_customers(&mut self) {
        self.clear_messages();

        match self.backend.customer_service.clear_customers() {
            Ok(()) => {
                self.customers.clear();
                self.success_message = Some("Table cleared".to_string());
                self.modals.show_clear_confirm_modal = false;
            }
            Err(e) => {
                warn!("Failed to clear table: {}", e);
                self.error_message = Some(format!("Failed to clear table: {}", e));
                self.modals.show_clear_confirm_modal = false;
            }
        }
    }

    fn close_update_modal(&mut self) {
        self.modals.show_update_modal = false;
        self.modals.reset_update_flow();
    }

    fn close_delete_modal(&mut self) {
        self.modals.show_delete_modal = false;
        self.modals.delete_input.clear();
    }
}
