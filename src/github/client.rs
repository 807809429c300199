use super::error::{GithubError, Result};
use super::host::RepositoryHost;
use super::types::{
    ApiErrorBody, CommitResult, ContentsResponse, PutContentsBody, PutContentsResponse, PutFile,
    RemoteFile, RepositoryInfo, RepositoryRef,
};
use crate::config::GithubConfig;
use base64::Engine;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("text-publisher/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// GitHub REST API client
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token,
        })
    }

    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        Self::new(
            config.api_url.clone(),
            config.resolve_token(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| GithubError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| GithubError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn contents_url(&self, repo: &RepositoryRef, path: &str) -> Result<Url> {
        let segments = ["repos", repo.owner.as_str(), repo.name.as_str(), "contents"]
            .into_iter()
            .chain(path.split('/').filter(|s| !s.is_empty()));
        self.endpoint(segments)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(GithubError::MissingToken)?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION))
    }
}

/// Turn a non-success response into a [`GithubError`] carrying GitHub's message
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    Err(GithubError::from_status(status.as_u16(), message))
}

#[async_trait::async_trait]
impl RepositoryHost for GithubClient {
    async fn get_file(
        &self,
        repo: &RepositoryRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Option<RemoteFile>> {
        let url = self.contents_url(repo, path)?;
        debug!("Looking up {} in {}@{}", path, repo, git_ref);

        let response = self
            .request(Method::GET, url)?
            .query(&[("ref", git_ref)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        match error_for_status(response).await?.json::<ContentsResponse>().await? {
            ContentsResponse::File(file) => Ok(Some(file)),
            ContentsResponse::Other(_) => Ok(None),
        }
    }

    async fn put_file(&self, repo: &RepositoryRef, file: PutFile) -> Result<CommitResult> {
        let url = self.contents_url(repo, &file.path)?;

        let body = PutContentsBody {
            message: &file.message,
            content: base64::engine::general_purpose::STANDARD.encode(file.content.as_bytes()),
            branch: &file.branch,
            sha: file.sha.as_deref(),
        };

        let response = self.request(Method::PUT, url)?.json(&body).send().await?;
        let result: PutContentsResponse = error_for_status(response).await?.json().await?;

        info!(
            "Committed {} to {}@{} ({})",
            file.path, repo, file.branch, result.commit.sha
        );

        Ok(CommitResult {
            commit_sha: result.commit.sha,
            commit_url: result.commit.html_url,
            content_url: result.content.and_then(|c| c.html_url),
        })
    }

    async fn get_repository(&self, repo: &RepositoryRef) -> Result<RepositoryInfo> {
        let url = self.endpoint(["repos", repo.owner.as_str(), repo.name.as_str()])?;
        let response = self.request(Method::GET, url)?.send().await?;
        Ok(error_for_status(response).await?.json().await?)
    }

    fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
