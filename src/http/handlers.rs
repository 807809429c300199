use super::error::ApiError;
use super::state::AppState;
use crate::convert::{ConversionEngine, ConversionMode, TextStats, DEFAULT_TITLE};
use crate::github::{file_path, GithubError, PutFile, RepositoryRef};
use crate::storage::{FileRecord, NewFileRecord};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Recent files returned when no usable `limit` is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Upper bound for `limit`
pub const MAX_RECENT_LIMIT: usize = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewRequest {
    pub content: String,

    /// `rules` (default) or `llm`
    pub mode: ConversionMode,

    /// Document `<title>`; defaults to "Generated Content"
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub html_content: String,
    pub stats: TextStats,
    pub engine: ConversionEngine,
    pub fell_back: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertAndPushRequest {
    pub content: String,

    /// Name of the generated file, without `.html`
    pub file_name: String,

    /// Optional directory inside the repository
    pub directory: Option<String>,

    /// `owner/repo`
    pub repository: String,

    pub branch: String,
    pub commit_message: String,
    pub mode: ConversionMode,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertAndPushResponse {
    pub success: bool,
    pub file: FileRecord,
    pub commit_url: String,
    pub file_url: String,
    pub engine: ConversionEngine,
    pub fell_back: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentFilesQuery {
    /// Kept as text so bad values fall back to the default instead of a 400
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GithubTestRequest {
    pub repository: String,
}

#[derive(Debug, Serialize)]
pub struct GithubTestResponse {
    pub success: bool,
    pub message: String,
}

impl ConvertAndPushRequest {
    fn validate(&self) -> Result<(), ApiError> {
        // Whitespace-only text is valid content; it converts to an empty body
        if self.content.is_empty() {
            return Err(ApiError::bad_request("Content is required"));
        }

        let required = [
            (&self.file_name, "File name is required"),
            (&self.repository, "Repository is required"),
            (&self.branch, "Branch is required"),
            (&self.commit_message, "Commit message is required"),
        ];

        match required.iter().find(|(value, _)| value.trim().is_empty()) {
            Some((_, message)) => Err(ApiError::bad_request(*message)),
            None => Ok(()),
        }
    }
}

impl RecentFilesQuery {
    fn effective_limit(&self) -> usize {
        match self.limit.as_deref().and_then(|l| l.trim().parse::<usize>().ok()) {
            Some(0) | None => DEFAULT_RECENT_LIMIT,
            Some(n) => n.min(MAX_RECENT_LIMIT),
        }
    }
}

fn title_or_default(title: &Option<String>) -> &str {
    title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/preview
/// Convert text without publishing
pub async fn preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    if req.content.is_empty() {
        return Err(ApiError::bad_request("Content is required"));
    }

    let conversion = state
        .converter
        .convert(&req.content, title_or_default(&req.title), req.mode)
        .await;

    Ok(Json(PreviewResponse {
        html_content: conversion.html,
        stats: TextStats::of(&req.content),
        engine: conversion.engine,
        fell_back: conversion.fell_back,
    }))
}

/// POST /api/convert-and-push
/// Convert text and commit it to GitHub as `<directory>/<fileName>.html`
pub async fn convert_and_push(
    State(state): State<AppState>,
    Json(req): Json<ConvertAndPushRequest>,
) -> Result<Json<ConvertAndPushResponse>, ApiError> {
    req.validate()?;

    if !state.host.has_token() {
        return Err(GithubError::MissingToken.into());
    }
    let repo = RepositoryRef::parse(&req.repository)?;
    let branch = req.branch.trim();
    let path = file_path(req.directory.as_deref(), req.file_name.trim());

    info!("Publishing {} to {}@{}", path, repo, branch);

    let conversion = state
        .converter
        .convert(&req.content, title_or_default(&req.title), req.mode)
        .await;

    // An existing file must be updated with its current blob sha
    let sha = state
        .host
        .get_file(&repo, &path, branch)
        .await?
        .map(|existing| existing.sha);

    let commit = state
        .host
        .put_file(
            &repo,
            PutFile {
                path: path.clone(),
                message: req.commit_message.clone(),
                content: conversion.html.clone(),
                branch: branch.to_string(),
                sha,
            },
        )
        .await?;

    let file_url = repo.blob_url(&state.web_url, branch, &path);

    let file = state
        .store
        .create_file(NewFileRecord {
            file_name: req.file_name.trim().to_string(),
            directory: req.directory.clone().unwrap_or_default(),
            content: req.content,
            html_content: conversion.html,
            repository: repo.to_string(),
            branch: branch.to_string(),
            commit_message: req.commit_message,
            github_url: Some(file_url.clone()),
        })
        .await
        .map_err(ApiError::internal)?;

    info!("Published {} ({})", file_url, commit.commit_sha);

    Ok(Json(ConvertAndPushResponse {
        success: true,
        file,
        commit_url: commit.commit_url,
        file_url,
        engine: conversion.engine,
        fell_back: conversion.fell_back,
    }))
}

/// GET /api/files/recent?limit=N
/// Most recently published files, newest first
pub async fn recent_files(
    State(state): State<AppState>,
    Query(query): Query<RecentFilesQuery>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let files = state
        .store
        .recent_files(query.effective_limit())
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(files))
}

/// GET /api/files/:id
/// A single published file record
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FileRecord>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("File not found"))?;

    state
        .store
        .get_file(id)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("File not found"))
}

/// POST /api/github/test
/// Check that the token can see the repository
pub async fn test_github_connection(
    State(state): State<AppState>,
    Json(req): Json<GithubTestRequest>,
) -> Result<Json<GithubTestResponse>, ApiError> {
    if !state.host.has_token() {
        return Err(ApiError::connection_test(GithubError::MissingToken));
    }
    let repo = RepositoryRef::parse(&req.repository).map_err(ApiError::connection_test)?;

    let info = state
        .host
        .get_repository(&repo)
        .await
        .map_err(ApiError::connection_test)?;

    info!(
        "GitHub connection ok: {} (default branch {})",
        info.full_name, info.default_branch
    );

    Ok(Json(GithubTestResponse {
        success: true,
        message: "GitHub connection successful".to_string(),
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
