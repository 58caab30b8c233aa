//! Completion provider abstraction.
//!
//! Handlers talk to a [`CompletionProvider`] so the Anthropic client can be
//! swapped for a scripted mock in tests.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The API answered with a non-success status. `body` is the raw
    /// response, kept for diagnostics.
    #[error("API error {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// One unit of a completion response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Result of a completion call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Completion {
    pub content: Vec<ContentBlock>,
}

impl Completion {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Text blocks in order, joined by newlines. Other block kinds are skipped.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trait for single-turn text completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one user turn under the given system instruction.
    async fn complete(&self, system: &str, user: &str) -> Result<Completion, ProviderError>;
}
