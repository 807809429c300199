/// Failures of the language-model call; always recovered by falling back
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Invalid LLM endpoint: {0}")]
    InvalidUrl(String),

    #[error("LLM provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("LLM provider returned no content")]
    EmptyResponse,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
