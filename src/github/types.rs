use super::error::{GithubError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `owner/repo` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/repo`; both parts must be non-empty and nothing else may follow
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = value.trim().split('/').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(GithubError::InvalidRepository(value.to_string())),
        }
    }

    /// Browser URL of `path` on `branch`, e.g.
    /// `https://github.com/octo/blog/blob/main/docs/post.html`
    pub fn blob_url(&self, web_url: &str, branch: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/blob/{}/{}",
            web_url.trim_end_matches('/'),
            self.owner,
            self.name,
            branch,
            path
        )
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository path of the generated HTML file
///
/// `file_path(Some("docs/"), "post")` is `docs/post.html`; an empty or
/// missing directory puts the file at the repository root.
pub fn file_path(directory: Option<&str>, file_name: &str) -> String {
    let directory = directory.unwrap_or("").trim().trim_matches('/');
    if directory.is_empty() {
        format!("{}.html", file_name)
    } else {
        format!("{}/{}.html", directory, file_name)
    }
}

/// An existing file in the repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteFile {
    pub path: String,
    /// Blob id, required to update the file
    pub sha: String,
    pub html_url: Option<String>,
}

/// Create-or-update request for one file
#[derive(Debug, Clone)]
pub struct PutFile {
    pub path: String,
    pub message: String,
    /// Raw file content; base64-encoded on the wire
    pub content: String,
    pub branch: String,
    /// Blob id of the file being replaced
    pub sha: Option<String>,
}

/// Outcome of a create-or-update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    pub commit_sha: String,
    pub commit_url: String,
    pub content_url: Option<String>,
}

/// Subset of the repository metadata GitHub returns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    pub full_name: String,
    pub default_branch: String,
    #[serde(default)]
    pub private: bool,
    pub html_url: String,
}

// ============================================================================
// Wire types
// ============================================================================

/// `GET /repos/{owner}/{repo}/contents/{path}` answers an object for files and
/// an array for directories
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ContentsResponse {
    File(RemoteFile),
    Other(serde_json::Value),
}

#[derive(Debug, Serialize)]
pub(crate) struct PutContentsBody<'a> {
    pub message: &'a str,
    pub content: String,
    pub branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutContentsResponse {
    pub content: Option<PutContentsFile>,
    pub commit: PutContentsCommit,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutContentsFile {
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutContentsCommit {
    pub sha: String,
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
