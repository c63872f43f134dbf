use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the data directory holding the collection files
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with an explicit base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new connection in the default data directory.
    /// This uses ~/Documents/Customer Manager; the location is fixed.
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine documents directory"))?;

        let data_dir = documents_dir.join("Customer Manager");
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base data directory
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of a collection file inside the data directory
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", collection))
    }
}
