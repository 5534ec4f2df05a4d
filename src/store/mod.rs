pub mod json_file;
pub mod memory;

use thiserror::Error;

use crate::models::Document;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Failures inside a record store
///
/// These never reach HTTP callers: stores log them and fall back to an
/// empty document (on read) or skip the write.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-document storage for user records
///
/// Every operation reads or writes the full document. There is no locking:
/// concurrent load/modify/save cycles race and the last writer wins.
pub trait RecordStore: Send + Sync {
    /// Read the full document, or an empty one if storage is missing or corrupt
    fn load(&self) -> Document;

    /// Overwrite storage with `document`; failures are logged and dropped
    fn save(&self, document: &Document);

    /// Read the document strictly, reporting the number of users
    fn probe(&self) -> Result<usize, StoreError>;
}
