//! # UI Components Module
//!
//! Per-component renderers for the customer manager interface: the input
//! panel with its action buttons, the customer table, the modal dialogs,
//! and the shared theme colors.

pub mod customer_table;
pub mod input_panel;
pub mod modals;
pub mod theme;
