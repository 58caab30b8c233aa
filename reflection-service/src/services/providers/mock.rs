//! Mock provider implementation for testing.

use super::{Completion, CompletionProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// A recorded call to [`MockCompletionProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// Scripted reply for the mock.
#[derive(Debug, Clone)]
pub enum MockReply {
    Complete(Completion),
    Upstream {
        status: u16,
        body: serde_json::Value,
    },
    Network(String),
}

/// Mock completion provider that replays one scripted reply and records calls.
pub struct MockCompletionProvider {
    reply: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletionProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying_text(text: &str) -> Self {
        Self::new(MockReply::Complete(Completion::from_text(text)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<Completion, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                system: system.to_string(),
                user: user.to_string(),
            });
        }

        match &self.reply {
            MockReply::Complete(completion) => Ok(completion.clone()),
            MockReply::Upstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Network(msg) => Err(ProviderError::Network(msg.clone())),
        }
    }
}
