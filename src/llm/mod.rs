pub mod client;
pub mod error;
pub mod messages;

pub use client::LlmClient;
pub use error::LlmError;
pub use messages::{ChatMessage, ChatRequest, ChatResponse};
