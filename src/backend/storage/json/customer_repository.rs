use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::backend::domain::models::customer::Customer;
use crate::backend::storage::traits::CustomerStorage;

const CUSTOMERS_COLLECTION: &str = "customers";

/// JSON-based customer repository: one document per customer, the whole
/// collection in a single `customers.json` file
#[derive(Clone)]
pub struct CustomerRepository {
    connection: Arc<JsonConnection>,
}

impl CustomerRepository {
    /// Create a new JSON customer repository
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn collection_path(&self) -> PathBuf {
        self.connection.collection_path(CUSTOMERS_COLLECTION)
    }

    /// Load every document in the collection.
    /// A missing or empty file reads as an empty collection.
    fn load_documents(&self) -> Result<Vec<Customer>> {
        let path = self.collection_path();

        if !path.exists() {
            debug!("Collection file {:?} does not exist, returning empty collection", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let customers: Vec<Customer> = serde_json::from_str(&content)?;
        Ok(customers)
    }

    /// Rewrite the whole collection. Atomic: temp file, then rename.
    fn save_documents(&self, customers: &[Customer]) -> Result<()> {
        let path = self.collection_path();
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
        }

        let content = serde_json::to_string_pretty(customers)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} customers to {:?}", customers.len(), path);
        Ok(())
    }
}

impl CustomerStorage for CustomerRepository {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.load_documents()
    }

    fn store_customer(&self, customer: &Customer) -> Result<()> {
        let mut customers = self.load_documents()?;
        customers.push(customer.clone());
        self.save_documents(&customers)
    }

    fn find_customer_by_last_name(&self, last_name: &str) -> Result<Option<Customer>> {
        let customers = self.load_documents()?;
        Ok(customers.into_iter().find(|c| c.last_name == last_name))
    }

    fn update_customer_by_last_name(&self, last_name: &str, customer: &Customer) -> Result<u64> {
        let mut customers = self.load_documents()?;

        match customers.iter_mut().find(|c| c.last_name == last_name) {
            Some(existing) => {
                // In-place overwrite keeps the record at its collection position
                *existing = customer.clone();
                self.save_documents(&customers)?;
                Ok(1)
            }
            None => {
                warn!("Update matched no document with last name: {}", last_name);
                Ok(0)
            }
        }
    }

    fn delete_customer_by_last_name(&self, last_name: &str) -> Result<u64> {
        let mut customers = self.load_documents()?;

        match customers.iter().position(|c| c.last_name == last_name) {
            Some(index) => {
                customers.remove(index);
                self.save_documents(&customers)?;
                Ok(1)
            }
            None => {
                warn!("Delete matched no document with last name: {}", last_name);
                Ok(0)
            }
        }
    }

    fn delete_all_customers(&self) -> Result<()> {
        self.save_documents(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (CustomerRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = CustomerRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn customer(id: &str, last_name: &str, district: &str, discount: i32) -> Customer {
        Customer {
            id: id.to_string(),
            last_name: last_name.to_string(),
            district: district.to_string(),
            discount,
        }
    }

    #[test]
    fn test_missing_file_reads_as_empty_collection() {
        let (repo, _temp_dir) = setup_test_repo();
        let customers = repo.list_customers().expect("Failed to list customers");
        assert!(customers.is_empty());
    }

    #[test]
    fn test_store_and_list_preserves_insertion_order() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .expect("Failed to store customer");
        repo.store_customer(&customer("2", "Petrov", "North", 15))
            .expect("Failed to store customer");

        let customers = repo.list_customers().expect("Failed to list customers");
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].last_name, "Ivanov");
        assert_eq!(customers[1].last_name, "Petrov");
    }

    #[test]
    fn test_find_by_last_name() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();

        let found = repo
            .find_customer_by_last_name("Ivanov")
            .expect("Failed to find customer");
        assert_eq!(found, Some(customer("1", "Ivanov", "Center", 10)));

        let missing = repo
            .find_customer_by_last_name("Sidorov")
            .expect("Failed to find customer");
        assert!(missing.is_none());
    }

    #[test]
    fn test_find_returns_first_match_among_duplicates() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();
        repo.store_customer(&customer("2", "Ivanov", "South", 20))
            .unwrap();

        let found = repo.find_customer_by_last_name("Ivanov").unwrap().unwrap();
        assert_eq!(found.id, "1");
    }

    #[test]
    fn test_update_replaces_all_fields_in_place() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();
        repo.store_customer(&customer("2", "Petrov", "North", 15))
            .unwrap();

        let modified = repo
            .update_customer_by_last_name("Ivanov", &customer("7", "Smirnov", "East", 25))
            .expect("Failed to update customer");
        assert_eq!(modified, 1);

        let customers = repo.list_customers().unwrap();
        assert_eq!(customers.len(), 2);
        // Updated record stays at its position
        assert_eq!(customers[0], customer("7", "Smirnov", "East", 25));
        assert_eq!(customers[1].last_name, "Petrov");
    }

    #[test]
    fn test_update_missing_returns_zero_and_leaves_file_unchanged() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();

        let modified = repo
            .update_customer_by_last_name("Sidorov", &customer("7", "Smirnov", "East", 25))
            .expect("Failed to update customer");
        assert_eq!(modified, 0);

        let customers = repo.list_customers().unwrap();
        assert_eq!(customers, vec![customer("1", "Ivanov", "Center", 10)]);
    }

    #[test]
    fn test_update_touches_only_first_duplicate() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();
        repo.store_customer(&customer("2", "Ivanov", "South", 20))
            .unwrap();

        let modified = repo
            .update_customer_by_last_name("Ivanov", &customer("1", "Smirnov", "East", 25))
            .unwrap();
        assert_eq!(modified, 1);

        let customers = repo.list_customers().unwrap();
        assert_eq!(customers[0].last_name, "Smirnov");
        assert_eq!(customers[1], customer("2", "Ivanov", "South", 20));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_customer(&customer("1", "Ivanov", "Center", 10))
            .unwrap();
        repo.store_customer(&customer("2", "Ivanov", "South", 20))
            .unwrap();

        let deleted = repo
            .delete_customer_by_last_name("Ivanov")
            .expect("Failed to delete customer");
        assert_eq!(deleted, 1);

        // Only the first match is gone
        let customers = repo.list_customers().unwrap();
        assert_eq!(customers, vec![customer("2", "Ivanov", "South", 20)]);

        let deleted = repo.delete_customer_by_last_name("Sidorov").unwrap();
        assert_eq!(deleted, 0);
        assert_eq!(repo.list_customers().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_empties_the_collection() {
        let (repo, _temp_dir) = setup_test_repo();

        for i in 0..4 {
            repo.store_customer(&customer(&i.to_string(), &format!("Name{}", i), "Center", i))
                .unwrap();
        }

        repo.delete_all_customers().expect("Failed to clear collection");
        assert!(repo.list_customers().unwrap().is_empty());

        // Clearing an already-empty collection is fine too
        repo.delete_all_customers().expect("Failed to clear collection");
        assert!(repo.list_customers().unwrap().is_empty());
    }

    #[test]
    fn test_collection_survives_across_repository_instances() {
        let temp_dir = TempDir::new().unwrap();

        {
            let connection = JsonConnection::new(temp_dir.path()).unwrap();
            let repo = CustomerRepository::new(Arc::new(connection));
            repo.store_customer(&customer("1", "Ivanov", "Center", 10))
                .unwrap();
        }

        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = CustomerRepository::new(Arc::new(connection));
        let customers = repo.list_customers().unwrap();
        assert_eq!(customers, vec![customer("1", "Ivanov", "Center", 10)]);

        // No stray temp file left behind by the atomic rewrite
        assert!(!temp_dir.path().join("customers.tmp").exists());
    }
}
