//! Shared HTTPS transport for OpenAI-compatible chat-completions endpoints.

use crate::ChatCompletionRequest;
use reqwest::{Client, Response};
use scenesense_error::{ModelsError, ModelsErrorKind, ProviderErrorKind};
use scenesense_interface::ProviderKind;
use tracing::{debug, error, instrument};

/// Bearer-authenticated client for one chat-completions URL.
///
/// No request timeout is configured; callers that need a deadline wrap the
/// call themselves.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    endpoint: String,
    provider: ProviderKind,
}

impl OpenAICompatibleClient {
    /// Creates a client for `endpoint`, authenticating with `api_key`.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        provider: ProviderKind,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            provider,
        }
    }

    /// Chat-completions URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Backend this client talks to.
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// POST `body` and return the response if its status is a success.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::Transport`] when no response arrives and
    /// [`ProviderErrorKind::Api`] for non-2xx statuses.
    #[instrument(skip(self, body), fields(provider = %self.provider, model = %body.model()))]
    pub async fn post(&self, body: &ChatCompletionRequest) -> Result<Response, ProviderErrorKind> {
        debug!(endpoint = %self.endpoint, messages = body.messages().len(), "Sending chat completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Chat completion request failed");
                ProviderErrorKind::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Provider returned error status");
            return Err(ProviderErrorKind::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = %status, "Chat completion accepted");
        Ok(response)
    }
}

impl std::fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("endpoint", &self.endpoint)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// Tag a provider failure with the backend it came from.
#[track_caller]
pub(crate) fn provider_error(provider: ProviderKind, kind: ProviderErrorKind) -> ModelsError {
    let kind = match provider {
        ProviderKind::Groq => ModelsErrorKind::Groq(kind),
        ProviderKind::Qubrid => ModelsErrorKind::Qubrid(kind),
    };
    ModelsError::new(kind)
}
