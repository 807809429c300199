//! HTTP API for the publishing UI
//!
//! - POST /api/preview - Convert text to an HTML document
//! - POST /api/convert-and-push - Convert and commit to GitHub
//! - GET /api/files/recent - Recently published files
//! - GET /api/files/:id - One published file
//! - POST /api/github/test - Check GitHub access to a repository
//! - GET /health - Health check

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{
    ConvertAndPushRequest, ConvertAndPushResponse, GithubTestRequest, GithubTestResponse,
    PreviewRequest, PreviewResponse, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT,
};
pub use routes::create_router;
pub use state::AppState;
