use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::Submission;

use super::{StoreError, SubmissionStore};

/// In-process store with no persistence.
#[derive(Default)]
pub struct MemoryStore {
    submissions: RwLock<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn append(&self, submission: Submission) -> Result<(), StoreError> {
        self.submissions.write().await.push(submission);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.submissions.read().await.clone())
    }
}
