pub mod commands;
pub mod customer_service;
pub mod models;

pub use customer_service::CustomerService;
