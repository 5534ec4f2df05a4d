use std::sync::{Mutex, PoisonError};

use crate::models::Document;

use super::{RecordStore, StoreError};

/// In-memory record store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> Document {
        self.load()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Document {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, document: &Document) {
        *self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = document.clone();
    }

    fn probe(&self) -> Result<usize, StoreError> {
        Ok(self.load().users.len())
    }
}
