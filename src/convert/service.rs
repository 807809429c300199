use super::html::{render_fragment, wrap_document};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// External text-to-HTML capability (e.g. a language model)
///
/// Implementations return a body fragment, not a full document.
#[async_trait::async_trait]
pub trait FragmentGenerator: Send + Sync {
    /// Produce an HTML body fragment for `text`
    async fn generate(&self, text: &str) -> Result<String>;

    /// Generator name for logging
    fn name(&self) -> &str;
}

/// Which converter the caller asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    #[default]
    Rules,
    Llm,
}

/// Which converter actually produced the fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionEngine {
    Rules,
    Llm,
}

/// Result of a conversion request
#[derive(Debug, Clone)]
pub struct Conversion {
    pub html: String,
    pub engine: ConversionEngine,
    /// True when the generator was asked but the rule-based converter answered
    pub fell_back: bool,
}

/// Converts text with an optional generator, falling back to the rule-based
/// converter whenever the generator is missing or fails.
#[derive(Clone, Default)]
pub struct ConversionService {
    generator: Option<Arc<dyn FragmentGenerator>>,
}

impl ConversionService {
    /// Rule-based conversion only
    pub fn rules_only() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Arc<dyn FragmentGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn convert(&self, text: &str, title: &str, mode: ConversionMode) -> Conversion {
        let generator = match (mode, &self.generator) {
            (ConversionMode::Llm, Some(generator)) => generator,
            (ConversionMode::Llm, None) => {
                debug!("No fragment generator configured, using rule-based converter");
                return Self::rule_based(text, title, true);
            }
            (ConversionMode::Rules, _) => return Self::rule_based(text, title, false),
        };

        match generator.generate(text).await {
            Ok(fragment) if !fragment.trim().is_empty() => Conversion {
                html: wrap_document(fragment.trim(), title),
                engine: ConversionEngine::Llm,
                fell_back: false,
            },
            Ok(_) => {
                warn!("{} returned an empty fragment, falling back", generator.name());
                Self::rule_based(text, title, true)
            }
            Err(e) => {
                warn!("{} failed, falling back: {:#}", generator.name(), e);
                Self::rule_based(text, title, true)
            }
        }
    }

    fn rule_based(text: &str, title: &str, fell_back: bool) -> Conversion {
        Conversion {
            html: wrap_document(&render_fragment(text), title),
            engine: ConversionEngine::Rules,
            fell_back,
        }
    }
}
