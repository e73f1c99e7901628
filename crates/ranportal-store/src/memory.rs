//! In-memory configuration storage.

use std::sync::RwLock;

use ranportal_types::{ConfigurationId, RanConfiguration};

use crate::{ConfigurationStore, Result, StoreError};

/// Keeps configurations in process memory.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<RanConfiguration>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.records.read().map_err(|_| StoreError::LockPoisoned)?.len())
    }

    /// Returns true if nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ConfigurationStore for MemoryStore {
    fn insert(&self, record: &RanConfiguration) -> Result<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::AlreadyExists(record.id()));
        }

        records.push(record.clone());
        Ok(())
    }

    fn get(&self, id: ConfigurationId) -> Result<Option<RanConfiguration>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<RanConfiguration>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut listed = records.clone();
        listed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(listed)
    }
}
