use crate::convert::ConversionService;
use crate::github::RepositoryHost;
use crate::storage::FileStore;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Published file records
    pub store: Arc<dyn FileStore>,

    /// Where generated files are committed
    pub host: Arc<dyn RepositoryHost>,

    /// Text → HTML, with optional LLM and fallback
    pub converter: Arc<ConversionService>,

    /// Web base for file links (e.g. `https://github.com`)
    pub web_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn FileStore>,
        host: Arc<dyn RepositoryHost>,
        converter: ConversionService,
        web_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            host,
            converter: Arc::new(converter),
            web_url: web_url.into(),
        }
    }
}
