use crate::github::GithubError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Error returned by handlers, rendered as `{"message": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
    }

    /// Map a GitHub failure during publishing
    pub fn publish(err: GithubError) -> Self {
        let message = match &err {
            GithubError::Unauthorized(_) => {
                "GitHub authentication failed. Please check your access token.".to_string()
            }
            GithubError::NotFound(_) => {
                "Repository not found. Please check the repository name and your access permissions."
                    .to_string()
            }
            GithubError::Forbidden(_) => {
                "Permission denied. Please check your GitHub access token permissions.".to_string()
            }
            other => other.to_string(),
        };
        Self::new(github_status(&err), message)
    }

    /// Map a GitHub failure during the connection test
    pub fn connection_test(err: GithubError) -> Self {
        let message = match &err {
            GithubError::MissingToken => "GitHub token not configured".to_string(),
            GithubError::InvalidRepository(_) => err.to_string(),
            GithubError::Unauthorized(_) => "GitHub authentication failed".to_string(),
            GithubError::NotFound(_) => "Repository not found".to_string(),
            GithubError::Forbidden(_) => "Permission denied".to_string(),
            _ => "GitHub connection failed".to_string(),
        };
        Self::new(github_status(&err), message)
    }
}

/// Upstream status passes through; local validation is a 400; anything else a 500
fn github_status(err: &GithubError) -> StatusCode {
    match err {
        GithubError::MissingToken | GithubError::InvalidRepository(_) => StatusCode::BAD_REQUEST,
        _ => err
            .status()
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Uses the publishing message table; the connection test maps its errors
/// with [`ApiError::connection_test`] instead.
impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        Self::publish(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("Request failed ({}): {}", self.status, self.message);
        } else {
            warn!("Request rejected ({}): {}", self.status, self.message);
        }

        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}
