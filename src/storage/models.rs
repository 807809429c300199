use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published file as remembered by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: Uuid,
    /// File name without the `.html` extension
    pub file_name: String,
    /// Target directory inside the repository, empty for the root
    pub directory: String,
    /// Raw text as submitted
    pub content: String,
    pub html_content: String,
    /// `owner/repo`
    pub repository: String,
    pub branch: String,
    pub commit_message: String,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileRecord {
    pub file_name: String,
    pub directory: String,
    pub content: String,
    pub html_content: String,
    pub repository: String,
    pub branch: String,
    pub commit_message: String,
    pub github_url: Option<String>,
}

impl FileRecord {
    pub fn from_new(new: NewFileRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: new.file_name,
            directory: new.directory,
            content: new.content,
            html_content: new.html_content,
            repository: new.repository,
            branch: new.branch,
            commit_message: new.commit_message,
            github_url: new.github_url,
            created_at,
        }
    }
}
