//! # Modals Module
//!
//! This module organizes the modal dialogs for the customer manager app.
//!
//! ## Module Organization:
//! - `update_customer` - Two-stage search-then-edit update dialog
//! - `delete_customer` - Last-name prompt for delete
//! - `clear_confirm` - Yes/no confirmation before clearing the table
//! - `shared` - Common overlay frame used by all of them

pub mod clear_confirm;
pub mod delete_customer;
pub mod shared;
pub mod update_customer;
