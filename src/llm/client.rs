use super::error::LlmError;
use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::LlmConfig;
use crate::convert::FragmentGenerator;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

const SYSTEM_PROMPT: &str = "You convert plain text into clean, semantic HTML. \
Return only the HTML body fragment: no <html>, <head> or <body> tags, no Markdown, no commentary. \
Use <p> for paragraphs, <ul>/<li> for bullet lists and <a> for URLs. Do not invent content.";

/// OpenAI-compatible chat completions client
pub struct LlmClient {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let endpoint = Url::parse(&format!(
            "{}/chat/completions",
            base_url.trim_end_matches('/')
        ))
        .map_err(|e| LlmError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client when an API key is available; `Ok(None)` otherwise
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, LlmError> {
        match config.resolve_api_key() {
            Some(api_key) => {
                info!("LLM conversion enabled ({} via {})", config.model, config.base_url);
                Self::new(
                    &config.base_url,
                    config.model.clone(),
                    api_key,
                    Duration::from_secs(config.timeout_secs),
                )
                .map(Some)
            }
            None => {
                info!("No LLM API key configured, LLM conversion disabled");
                Ok(None)
            }
        }
    }

    /// Ask the model for an HTML fragment of `text`
    pub async fn complete(&self, text: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(text)],
            temperature: 0.2,
        };

        debug!("Requesting HTML fragment from {} ({} chars)", self.model, text.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = response.json().await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| strip_code_fence(&choice.message.content).to_string())
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content)
    }
}

#[async_trait::async_trait]
impl FragmentGenerator for LlmClient {
    async fn generate(&self, text: &str) -> anyhow::Result<String> {
        Ok(self.complete(text).await?)
    }

    fn name(&self) -> &str {
        "llm"
    }
}

/// Models like to wrap answers in ```html fences
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag line
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("<p>x</p>"), "<p>x</p>");
        assert_eq!(strip_code_fence("```html\n<p>x</p>\n```"), "<p>x</p>");
        assert_eq!(strip_code_fence("```\n<p>x</p>\n```\n"), "<p>x</p>");
        assert_eq!(strip_code_fence("  <ul></ul>  "), "<ul></ul>");
    }

    #[test]
    fn test_endpoint_built_from_base_url() {
        let client =
            LlmClient::new("http://localhost:8000/v1/", "m", "k", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "http://localhost:8000/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            LlmClient::new("::", "m", "k", Duration::from_secs(1)),
            Err(LlmError::InvalidUrl(_))
        ));
    }
}
