use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::EMPTY_DOCUMENT_JSON;
use crate::models::Document;

use super::{RecordStore, StoreError};

/// Record store backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file with an empty document if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        tracing::info!("Opening record store at: {:?}", path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create record store directory: {}", e);
                    e
                })?;
            }
        }

        if !path.exists() {
            tracing::info!("Record store file {:?} not found. Initializing new document.", path);
            fs::write(&path, EMPTY_DOCUMENT_JSON)?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)?;

        // Write next to the target, then swap it in
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Document {
        match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(
                    "Error reading record store {:?}: {}. Returning empty document.",
                    self.path,
                    e
                );
                Document::default()
            }
        }
    }

    fn save(&self, document: &Document) {
        if let Err(e) = self.write_document(document) {
            tracing::error!("Error writing record store {:?}: {}", self.path, e);
        }
    }

    fn probe(&self) -> Result<usize, StoreError> {
        match self.read_document() {
            Ok(document) => Ok(document.users.len()),
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;
    use tempfile::TempDir;

    fn sample_document() -> Document {
        let mut document = Document::default();
        let mut user = UserRecord::new(
            "id-1".to_string(),
            "a@b.com".to_string(),
            "al".to_string(),
            String::new(),
            "hash".to_string(),
        );
        user.watchlist.push(crate::models::MovieId::from("m9"));
        document.users.insert(user.id.clone(), user);
        document
    }

    #[test]
    fn test_open_creates_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("users.json");

        let store = JsonFileStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.load(), Document::default());
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "users": {} }));
    }

    #[test]
    fn test_open_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        fs::write(&path, serde_json::to_string(&sample_document()).unwrap()).unwrap();

        let store = JsonFileStore::open(&path).unwrap();

        assert_eq!(store.load(), sample_document());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp_dir.path().join("users.json")).unwrap();

        store.save(&sample_document());

        assert_eq!(store.load(), sample_document());
        assert_eq!(store.probe().unwrap(), 1);
        assert!(!temp_dir.path().join("users.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let store = JsonFileStore::open(&path).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(store.load(), Document::default());
        assert!(store.probe().is_err());
    }

    #[test]
    fn test_deleted_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let store = JsonFileStore::open(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(store.load(), Document::default());
        assert_eq!(store.probe().unwrap(), 0);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let store = JsonFileStore::open(&path).unwrap();
        fs::remove_file(&path).unwrap();
        // A directory where the file should be makes the rename fail
        fs::create_dir(&path).unwrap();

        store.save(&sample_document());

        assert!(path.is_dir());
    }
}
