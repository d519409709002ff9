pub mod json_file;
pub mod memory;

use async_trait::async_trait;

use crate::models::Submission;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Store I/O error: {err}"),
            StoreError::Serialize(err) => write!(f, "Store serialization error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err)
    }
}

/// Append-only collection of submissions, kept in arrival order.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append(&self, submission: Submission) -> Result<(), StoreError>;

    /// Every stored submission, oldest first.
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError>;
}
