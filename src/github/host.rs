use super::error::Result;
use super::types::{CommitResult, PutFile, RemoteFile, RepositoryInfo, RepositoryRef};

/// Repository hosting capability used by the publish flow
///
/// Implementations:
/// - `GithubClient`: GitHub REST API (contents + repos endpoints)
/// - test doubles in the HTTP API tests
#[async_trait::async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetch metadata of an existing file at `path` on `git_ref`
    ///
    /// Returns `Ok(None)` when the file does not exist.
    async fn get_file(
        &self,
        repo: &RepositoryRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Option<RemoteFile>>;

    /// Create the file, or replace it when `file.sha` names the current blob
    async fn put_file(&self, repo: &RepositoryRef, file: PutFile) -> Result<CommitResult>;

    /// Fetch repository metadata; used to check credentials and access
    async fn get_repository(&self, repo: &RepositoryRef) -> Result<RepositoryInfo>;

    /// Whether credentials are available at all
    fn has_token(&self) -> bool;
}
