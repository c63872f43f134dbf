//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::backend::domain::models::customer::Customer;

/// Trait defining the interface for customer storage operations
///
/// This is the persistence gateway: six direct passthroughs to the backing
/// document collection, no retry, no transaction wrapping, no pagination.
/// Match semantics for the by-last-name operations are first-match only.
///
/// Note: all operations are synchronous for the desktop-only egui app
pub trait CustomerStorage: Send + Sync {
    /// List every stored customer in backing-store natural order
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Store a new customer document. Field validation is the caller's job.
    fn store_customer(&self, customer: &Customer) -> Result<()>;

    /// Retrieve the first customer with the given last name
    fn find_customer_by_last_name(&self, last_name: &str) -> Result<Option<Customer>>;

    /// Replace all four fields of the first customer matching `last_name`.
    /// Returns the number of documents modified (0 or 1).
    fn update_customer_by_last_name(&self, last_name: &str, customer: &Customer) -> Result<u64>;

    /// Delete the first customer with the given last name.
    /// Returns the number of documents deleted (0 or 1).
    fn delete_customer_by_last_name(&self, last_name: &str) -> Result<u64>;

    /// Unconditionally delete every customer
    fn delete_all_customers(&self) -> Result<()>;
}
