//! Repository host client
//!
//! Publishing needs three GitHub calls:
//! - GET /repos/:owner/:repo/contents/:path?ref=:branch - existing blob sha (404 = new file)
//! - PUT /repos/:owner/:repo/contents/:path - create or update the file
//! - GET /repos/:owner/:repo - connection test

mod client;
mod error;
mod host;
mod types;

pub use client::GithubClient;
pub use error::{GithubError, Result};
pub use host::RepositoryHost;
pub use types::{
    file_path, CommitResult, PutFile, RemoteFile, RepositoryInfo, RepositoryRef,
};
