use super::models::{FileRecord, NewFileRecord};
use anyhow::Result;
use uuid::Uuid;

/// Record store for published files
///
/// Implementations:
/// - `MemoryFileStore`: process-local, lost on restart
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Persist a new record, assigning its id and creation time
    async fn create_file(&self, file: NewFileRecord) -> Result<FileRecord>;

    /// Look up a record by id
    async fn get_file(&self, id: Uuid) -> Result<Option<FileRecord>>;

    /// At most `limit` records, newest first
    async fn recent_files(&self, limit: usize) -> Result<Vec<FileRecord>>;
}
