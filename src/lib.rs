pub mod config;
pub mod convert;
pub mod github;
pub mod http;
pub mod llm;
pub mod storage;

pub use config::Config;
pub use convert::{
    convert_text_to_html, convert_text_to_html_with_title, ConversionEngine, ConversionMode,
    ConversionService, Document, FragmentGenerator, TextStats, DEFAULT_TITLE,
};
pub use github::{GithubClient, GithubError, RepositoryHost, RepositoryRef};
pub use http::{create_router, AppState};
pub use llm::{LlmClient, LlmError};
pub use storage::{FileRecord, FileStore, MemoryFileStore, NewFileRecord};
