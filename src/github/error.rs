pub type Result<T> = std::result::Result<T, GithubError>;

/// Failures talking to the repository host
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// No token in config or environment
    #[error("GitHub token not configured. Please set GITHUB_TOKEN environment variable.")]
    MissingToken,

    /// Repository identifier is not `owner/repo`
    #[error("Repository must be in format 'owner/repo'")]
    InvalidRepository(String),

    /// 401 from GitHub
    #[error("GitHub rejected the credentials: {0}")]
    Unauthorized(String),

    /// 403 from GitHub
    #[error("GitHub denied access: {0}")]
    Forbidden(String),

    /// 404 from GitHub
    #[error("GitHub resource not found: {0}")]
    NotFound(String),

    /// Any other non-success status, with GitHub's message
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request could not be built from the configured base URL
    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, timeout or body decoding failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl GithubError {
    /// Upstream HTTP status, if GitHub answered
    pub fn status(&self) -> Option<u16> {
        match self {
            GithubError::Unauthorized(_) => Some(401),
            GithubError::Forbidden(_) => Some(403),
            GithubError::NotFound(_) => Some(404),
            GithubError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => GithubError::Unauthorized(message),
            403 => GithubError::Forbidden(message),
            404 => GithubError::NotFound(message),
            _ => GithubError::Api { status, message },
        }
    }
}
