use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub github: GithubConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// REST API base, e.g. `https://api.github.com`
    pub api_url: String,
    /// Web base used to build file URLs
    pub web_url: String,
    /// Personal access token; see [`GithubConfig::resolve_token`]
    pub token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible API base, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    /// Load defaults, then the optional file at `path`, then
    /// `TEXT_PUBLISHER__SECTION__KEY` environment variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "text-publisher")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 5000)?
            .set_default("github.api_url", "https://api.github.com")?
            .set_default("github.web_url", "https://github.com")?
            .set_default("github.timeout_secs", 30)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.timeout_secs", 60)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TEXT_PUBLISHER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        Ok(settings.try_deserialize()?)
    }
}

impl GithubConfig {
    /// Configured token, else `GITHUB_TOKEN`, else `GITHUB_ACCESS_TOKEN`
    pub fn resolve_token(&self) -> Option<String> {
        non_empty(self.token.clone())
            .or_else(|| non_empty(std::env::var("GITHUB_TOKEN").ok()))
            .or_else(|| non_empty(std::env::var("GITHUB_ACCESS_TOKEN").ok()))
    }
}

impl LlmConfig {
    /// Configured key, else `OPENAI_API_KEY`
    pub fn resolve_api_key(&self) -> Option<String> {
        non_empty(self.api_key.clone()).or_else(|| non_empty(std::env::var("OPENAI_API_KEY").ok()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
