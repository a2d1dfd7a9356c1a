//! Scripted [`ChatDriver`] that records every request it receives.

use async_trait::async_trait;
use scenesense_core::{GenerateRequest, GenerateResponse};
use scenesense_error::{ModelsError, ModelsErrorKind, ProviderErrorKind, SceneSenseResult};
use scenesense_interface::{ChatDriver, ProviderKind};
use std::sync::Mutex;

/// What the mock does on each call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with this text
    Reply(String),
    /// Fail as if the provider answered with this status
    ApiError(u16),
}

/// Driver returning a fixed behavior for a fixed provider.
pub struct MockChatDriver {
    provider: ProviderKind,
    behavior: MockBehavior,
    requests: Mutex<Vec<GenerateRequest>>,
}

#[allow(dead_code)]
impl MockChatDriver {
    /// Mock that replies with `text`.
    pub fn replying(provider: ProviderKind, text: impl Into<String>) -> Self {
        Self::new(provider, MockBehavior::Reply(text.into()))
    }

    /// Mock that fails with an API error.
    pub fn failing(provider: ProviderKind, status: u16) -> Self {
        Self::new(provider, MockBehavior::ApiError(status))
    }

    /// Mock with an explicit behavior.
    pub fn new(provider: ProviderKind, behavior: MockBehavior) -> Self {
        Self {
            provider,
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("mock lock poisoned").len()
    }

    /// Most recent request.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl ChatDriver for MockChatDriver {
    async fn generate(&self, req: &GenerateRequest) -> SceneSenseResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(req.clone());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::ApiError(status) => {
                let kind = ProviderErrorKind::Api {
                    status: *status,
                    message: "mock failure".to_string(),
                };
                let kind = match self.provider {
                    ProviderKind::Groq => ModelsErrorKind::Groq(kind),
                    ProviderKind::Qubrid => ModelsErrorKind::Qubrid(kind),
                };
                Err(ModelsError::new(kind).into())
            }
        }
    }

    fn provider(&self) -> ProviderKind {
        self.provider
    }
}
