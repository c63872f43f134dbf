use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::customers::{
    AddCustomerCommand, AddCustomerResult, CustomerInput, CustomerListResult,
    DeleteCustomerCommand, DeleteCustomerResult, FindCustomerQuery, FindCustomerResult,
    UpdateCustomerCommand, UpdateCustomerResult, ValidationError,
};
use crate::backend::domain::models::customer::Customer;
use crate::backend::storage::json::{CustomerRepository, JsonConnection};
use crate::backend::storage::traits::CustomerStorage;

/// Service for managing the customer collection
#[derive(Clone)]
pub struct CustomerService {
    customer_repository: CustomerRepository,
}

impl CustomerService {
    /// Create a new CustomerService
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let customer_repository = CustomerRepository::new(connection);
        Self { customer_repository }
    }

    /// List every stored customer, collection order
    pub fn list_customers(&self) -> Result<CustomerListResult> {
        let customers = self.customer_repository.list_customers()?;
        info!("Found {} customers", customers.len());
        Ok(CustomerListResult { customers })
    }

    /// Add a customer from raw form input
    pub fn add_customer(&self, command: AddCustomerCommand) -> Result<AddCustomerResult> {
        let customer = match parse_input(&command.input) {
            Ok(customer) => customer,
            Err(e) => {
                warn!("Rejected add: {}", e);
                return Ok(AddCustomerResult::Invalid(e));
            }
        };

        self.customer_repository.store_customer(&customer)?;

        info!("Added customer: {} (id {})", customer.last_name, customer.id);
        Ok(AddCustomerResult::Added(customer))
    }

    /// Look up the first customer with the given last name
    pub fn find_customer(&self, query: FindCustomerQuery) -> Result<FindCustomerResult> {
        if query.last_name.is_empty() {
            return Ok(FindCustomerResult::Invalid(ValidationError::EmptyLastName));
        }

        match self
            .customer_repository
            .find_customer_by_last_name(&query.last_name)?
        {
            Some(customer) => Ok(FindCustomerResult::Found(customer)),
            None => {
                warn!("Customer not found: {}", query.last_name);
                Ok(FindCustomerResult::NotFound)
            }
        }
    }

    /// Overwrite all four fields of the first customer matching the search
    /// last name
    pub fn update_customer(&self, command: UpdateCustomerCommand) -> Result<UpdateCustomerResult> {
        if command.search_last_name.is_empty() {
            return Ok(UpdateCustomerResult::Invalid(ValidationError::EmptyLastName));
        }

        let customer = match parse_input(&command.input) {
            Ok(customer) => customer,
            Err(e) => {
                warn!("Rejected update: {}", e);
                return Ok(UpdateCustomerResult::Invalid(e));
            }
        };

        let modified = self
            .customer_repository
            .update_customer_by_last_name(&command.search_last_name, &customer)?;

        if modified == 0 {
            warn!("Update matched no customer: {}", command.search_last_name);
            return Ok(UpdateCustomerResult::NotFound);
        }

        info!(
            "Updated customer {} -> {} (id {})",
            command.search_last_name, customer.last_name, customer.id
        );
        Ok(UpdateCustomerResult::Updated(customer))
    }

    /// Delete the first customer with the given last name
    pub fn delete_customer(&self, command: DeleteCustomerCommand) -> Result<DeleteCustomerResult> {
        if command.last_name.is_empty() {
            return Ok(DeleteCustomerResult::Invalid(ValidationError::EmptyLastName));
        }

        let deleted = self
            .customer_repository
            .delete_customer_by_last_name(&command.last_name)?;

        if deleted == 0 {
            warn!("Delete matched no customer: {}", command.last_name);
            return Ok(DeleteCustomerResult::NotFound);
        }

        info!("Deleted customer: {}", command.last_name);
        Ok(DeleteCustomerResult::Deleted)
    }

    /// Unconditionally remove every customer
    pub fn clear_customers(&self) -> Result<()> {
        self.customer_repository.delete_all_customers()?;
        info!("Cleared customer collection");
        Ok(())
    }
}

/// Validate raw form input and parse the discount.
///
/// Empty checks run on the text exactly as typed; no trimming, matching the
/// form behavior the operators already know.
fn parse_input(input: &CustomerInput) -> std::result::Result<Customer, ValidationError> {
    if input.id.is_empty()
        || input.last_name.is_empty()
        || input.district.is_empty()
        || input.discount.is_empty()
    {
        return Err(ValidationError::EmptyField);
    }

    let discount = input
        .discount
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidDiscount)?;

    Ok(Customer {
        id: input.id.clone(),
        last_name: input.last_name.clone(),
        district: input.district.clone(),
        discount,
    })
}
