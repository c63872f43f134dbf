//! Command and result types for customer operations.
//!
//! The UI hands the service raw form text via commands; the service answers
//! with explicit result values. Validation failures and not-found are data,
//! not errors; `Err` is reserved for storage failures.

use thiserror::Error;

use crate::backend::domain::models::customer::Customer;

/// Raw field input as read from a form, unparsed.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub id: String,
    pub last_name: String,
    pub district: String,
    /// Discount text as typed; parsed to an integer by the service
    pub discount: String,
}

#[derive(Debug, Clone)]
pub struct AddCustomerCommand {
    pub input: CustomerInput,
}

#[derive(Debug, Clone)]
pub struct FindCustomerQuery {
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerCommand {
    /// Last name the operator searched for; the storage match key.
    /// The edited fields may carry a different last name.
    pub search_last_name: String,
    pub input: CustomerInput,
}

#[derive(Debug, Clone)]
pub struct DeleteCustomerCommand {
    pub last_name: String,
}

/// Input problems detected before any storage call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled in")]
    EmptyField,
    #[error("Discount must be a whole number")]
    InvalidDiscount,
    #[error("A last name must be entered")]
    EmptyLastName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCustomerResult {
    Added(Customer),
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindCustomerResult {
    Found(Customer),
    NotFound,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCustomerResult {
    Updated(Customer),
    NotFound,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteCustomerResult {
    Deleted,
    NotFound,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerListResult {
    pub customers: Vec<Customer>,
}
