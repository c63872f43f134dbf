//! # JSON Storage Module
//!
//! File-based document storage for the customer manager. The collection is a
//! single JSON file holding an array of flat documents, read in full on every
//! operation and rewritten atomically on every mutation.
//!
//! ## File Format
//!
//! ```json
//! [
//!   { "id": "1", "last_name": "Ivanov", "district": "Center", "discount": 10 },
//!   { "id": "2", "last_name": "Petrov", "district": "North", "discount": 15 }
//! ]
//! ```

pub mod connection;
pub mod customer_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use customer_repository::CustomerRepository;
