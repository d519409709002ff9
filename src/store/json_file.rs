use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::models::Submission;

use super::{StoreError, SubmissionStore};

/// Submissions kept as one pretty-printed JSON array in a single file.
///
/// Every append rewrites the whole file in place. Appends from this process
/// are serialized through `write_lock`; other processes writing the same file
/// are not coordinated with.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the raw array from disk. A missing file is empty, and so is one
    /// that is not a JSON array: corruption is logged, not surfaced.
    /// Entries inside a well-formed array are kept as-is, objects or not.
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable submissions file {}: {e}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[Value]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }

        let content = to_pretty_json(entries)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.push(Value::Object(submission.fields));
        self.save(&entries).await
    }

    /// Object entries in file order. Anything else in the array stays on
    /// disk but is not a submission.
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let entries = self.load().await?;
        Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(fields) => Some(Submission { fields }),
                _ => None,
            })
            .collect())
    }
}

/// Four-space indentation; non-ASCII text is written as-is.
fn to_pretty_json(entries: &[Value]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    Ok(buf)
}
