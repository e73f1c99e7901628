//! Append-only document store for ranportal RAN configurations.
//!
//! Records are immutable once written: stores expose insert and read
//! operations only.
//!
//! - [`ConfigurationStore`] - Storage capability used by the HTTP layer
//! - [`FileStore`] - One JSON document per record on disk
//! - [`MemoryStore`] - In-process store for tests and ephemeral servers
//! - [`StoreError`] - Storage failures

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

use ranportal_types::{ConfigurationId, RanConfiguration};

/// Persistent storage for [`RanConfiguration`] records.
pub trait ConfigurationStore: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if a record with the same id is
    /// already stored, or an I/O error from the backend.
    fn insert(&self, record: &RanConfiguration) -> Result<()>;

    /// Loads a record by id, returning `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read.
    fn get(&self, id: ConfigurationId) -> Result<Option<RanConfiguration>>;

    /// Lists all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    fn list(&self) -> Result<Vec<RanConfiguration>>;
}
