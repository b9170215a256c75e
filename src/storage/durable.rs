//! Adapter that persists the transaction and category collections.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{default_categories, Category, Transaction};

use super::{KeyValueStore, NullStore, Result};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";

/// Sole owner of the persistence medium. Loads never fail: absent, unreadable,
/// or malformed records come back as empty collections.
pub struct DurableStore {
    medium: Box<dyn KeyValueStore>,
}

impl DurableStore {
    pub fn new(medium: Box<dyn KeyValueStore>) -> Self {
        Self { medium }
    }

    /// Adapter for hosts without a persistence medium.
    pub fn unavailable() -> Self {
        Self::new(Box::new(NullStore))
    }

    pub fn is_available(&self) -> bool {
        self.medium.is_available()
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.load_collection(TRANSACTIONS_KEY)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.save_collection(TRANSACTIONS_KEY, transactions)
    }

    /// Returns the persisted categories, or nothing. Seeding is the caller's job.
    pub fn load_categories(&self) -> Vec<Category> {
        self.load_collection(CATEGORIES_KEY)
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.save_collection(CATEGORIES_KEY, categories)
    }

    /// Writes the default category seed and an empty transaction list when the
    /// respective records are missing. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        if !self.is_available() {
            return Ok(());
        }
        if !self.contains(CATEGORIES_KEY) {
            info!("Seeding default categories.");
            self.save_categories(&default_categories())?;
        }
        if !self.contains(TRANSACTIONS_KEY) {
            self.save_transactions(&[])?;
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        matches!(self.medium.get(key), Ok(Some(_)))
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.medium.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, error = %err, "Unable to read persisted record; treating as empty.");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(key, error = %err, "Malformed persisted record; treating as empty.");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.medium.set(key, &json)?;
        debug!(key, count = items.len(), "Persisted collection.");
        Ok(())
    }
}
