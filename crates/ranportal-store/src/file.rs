//! File-backed configuration storage.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use ranportal_types::{ConfigurationId, RanConfiguration};
use tempfile::NamedTempFile;

use crate::{ConfigurationStore, Result, StoreError};

/// Stores each configuration as a JSON document on disk.
///
/// Documents live in `<base>/configurations/<id>.json`. Each document is
/// staged in a temporary sibling file and moved into place only once fully
/// written, so a document is either complete or absent, and an existing
/// record is never overwritten.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Base directory for storage.
    base_path: PathBuf,
    /// Directory for configuration documents.
    configurations_path: PathBuf,
}

impl FileStore {
    /// Creates a new file store with the given base path.
    ///
    /// Creates the necessary subdirectories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let configurations_path = base_path.join("configurations");

        for path in [&base_path, &configurations_path] {
            if !path.exists() {
                fs::create_dir_all(path).map_err(|e| StoreError::CreateDir {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(Self {
            base_path,
            configurations_path,
        })
    }

    /// Returns the default path for ranportal data.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/ranportal/`
    /// - macOS: `~/Library/Application Support/ranportal/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\ranportal\`
    ///
    /// Falls back to `~/.ranportal/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "ranportal").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Creates a file store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the base path for storage.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path to a configuration's document.
    #[must_use]
    pub fn document_path(&self, id: ConfigurationId) -> PathBuf {
        self.configurations_path.join(format!("{id}.json"))
    }

    fn read_document(path: &Path) -> Result<RanConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl ConfigurationStore for FileStore {
    fn insert(&self, record: &RanConfiguration) -> Result<()> {
        let path = self.document_path(record.id());
        let json = serde_json::to_string_pretty(record)?;

        write_new(&self.configurations_path, &path, |file| {
            file.write_all(json.as_bytes())
        })
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                StoreError::AlreadyExists(record.id())
            } else {
                StoreError::WriteFile {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;

        tracing::debug!(id = %record.id(), "stored configuration");
        Ok(())
    }

    fn get(&self, id: ConfigurationId) -> Result<Option<RanConfiguration>> {
        let path = self.document_path(id);

        if !path.exists() {
            return Ok(None);
        }

        Self::read_document(&path).map(Some)
    }

    fn list(&self) -> Result<Vec<RanConfiguration>> {
        let entries =
            fs::read_dir(&self.configurations_path).map_err(|e| StoreError::ReadDir {
                path: self.configurations_path.clone(),
                source: e,
            })?;

        let mut records = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadDir {
                path: self.configurations_path.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match Self::read_document(&path) {
                    Ok(record) => records.push(record),
                    // Skip corrupt documents rather than failing the listing
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable configuration"),
                }
            }
        }

        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(records)
    }
}

/// Creates `path` with the bytes produced by `write`.
///
/// The bytes go to a `.tmp` file in `dir` first; it is synced and then moved
/// to `path` without replacing an existing file. On any error the staged file
/// is removed and `path` is left untouched.
fn write_new(
    dir: &Path,
    path: &Path,
    write: impl FnOnce(&mut NamedTempFile) -> io::Result<()>,
) -> io::Result<()> {
    let mut staged = tempfile::Builder::new()
        .prefix(".staged-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    write(&mut staged)?;
    staged.as_file().sync_all()?;
    staged.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".ranportal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranportal_types::{DuplexMode, RanParameters, SimulationResult};
    use std::time::Duration;
    use tempfile::TempDir;

    fn create_test_record(mode: DuplexMode) -> RanConfiguration {
        let params = RanParameters::new(3.5e9, 20e6, mode, 20.0).unwrap();
        RanConfiguration::new(params, SimulationResult::new(188_193_080.0, 0.00375))
    }

    fn document_names(store: &FileStore) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(&store.configurations_path)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_file_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.base_path().exists());
        assert!(temp_dir.path().join("configurations").exists());
    }

    #[test]
    fn test_insert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let record = create_test_record(DuplexMode::Tdd);
        store.insert(&record).unwrap();

        let loaded = store.get(record.id()).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_get_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.get(ConfigurationId::new()).unwrap().is_none());
    }

    #[test]
    fn test_insert_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let record = create_test_record(DuplexMode::Fdd);
        store.insert(&record).unwrap();

        assert!(matches!(
            store.insert(&record),
            Err(StoreError::AlreadyExists(id)) if id == record.id()
        ));
    }

    #[test]
    fn test_insert_leaves_only_the_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let record = create_test_record(DuplexMode::Tdd);
        store.insert(&record).unwrap();

        assert_eq!(document_names(&store), vec![format!("{}.json", record.id())]);
    }

    #[test]
    fn test_failed_write_leaves_no_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();
        let id = ConfigurationId::new();
        let path = store.document_path(id);

        let result = write_new(&store.configurations_path, &path, |file| {
            file.write_all(br#"{"id": "#)?;
            Err(io::Error::other("no space left on device"))
        });

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(document_names(&store).is_empty());
        assert!(store.get(id).unwrap().is_none());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_refused_overwrite_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let record = create_test_record(DuplexMode::Fdd);
        store.insert(&record).unwrap();
        let original = fs::read_to_string(store.document_path(record.id())).unwrap();

        assert!(store.insert(&record).is_err());

        assert_eq!(
            fs::read_to_string(store.document_path(record.id())).unwrap(),
            original
        );
        assert_eq!(document_names(&store).len(), 1);
    }

    #[test]
    fn test_list_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let older = create_test_record(DuplexMode::Tdd);
        std::thread::sleep(Duration::from_millis(5));
        let newer = create_test_record(DuplexMode::Fdd);

        store.insert(&older).unwrap();
        store.insert(&newer).unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), newer.id());
        assert_eq!(records[1].id(), older.id());
    }

    #[test]
    fn test_list_skips_corrupt_documents() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.insert(&create_test_record(DuplexMode::Tdd)).unwrap();
        fs::write(
            temp_dir.path().join("configurations").join("broken.json"),
            "{not json",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("configurations").join("notes.txt"),
            "ignored",
        )
        .unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_corrupt_document_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let id = ConfigurationId::new();
        fs::write(store.document_path(id), "[]").unwrap();

        assert!(matches!(store.get(id), Err(StoreError::ParseJson { .. })));
    }

    #[test]
    fn test_document_path() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let id = ConfigurationId::new();
        let path = store.document_path(id);

        assert!(path.to_string_lossy().contains("configurations"));
        assert!(path.to_string_lossy().ends_with(".json"));
    }
}
