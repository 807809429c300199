use super::models::{FileRecord, NewFileRecord};
use super::traits::FileStore;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory [`FileStore`]
#[derive(Clone, Default)]
pub struct MemoryFileStore {
    /// Records in insertion order
    files: Arc<RwLock<Vec<FileRecord>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl FileStore for MemoryFileStore {
    async fn create_file(&self, file: NewFileRecord) -> Result<FileRecord> {
        let record = FileRecord::from_new(file, Utc::now());

        let mut files = self.files.write().await;
        files.push(record.clone());
        debug!("Stored file record {} ({} total)", record.id, files.len());

        Ok(record)
    }

    async fn get_file(&self, id: Uuid) -> Result<Option<FileRecord>> {
        let files = self.files.read().await;
        Ok(files.iter().find(|f| f.id == id).cloned())
    }

    async fn recent_files(&self, limit: usize) -> Result<Vec<FileRecord>> {
        let files = self.files.read().await;

        // Newest insert first, then a stable sort keeps that order on equal timestamps
        let mut recent: Vec<FileRecord> = files.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);

        Ok(recent)
    }
}
