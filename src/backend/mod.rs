//! # Backend Module
//!
//! This backend module provides direct access to the domain service and
//! storage for the egui frontend. All operations are synchronous: the app is
//! desktop-only, single-operator, and every user action is a blocking
//! request/response pair against the document collection.

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::json::JsonConnection;

/// Main backend struct that owns the storage connection and services
pub struct Backend {
    pub customer_service: domain::CustomerService,
}

impl Backend {
    /// Create a backend against the default data directory.
    ///
    /// The storage location is fixed; there are no flags or config files to
    /// point the app somewhere else.
    pub fn new() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Ok(Self::with_connection(connection))
    }

    /// Create a backend over an existing connection (used by tests)
    pub fn with_connection(connection: Arc<JsonConnection>) -> Self {
        let customer_service = domain::CustomerService::new(connection);
        Self { customer_service }
    }
}
