//! Qubrid HTTPS driver.

use crate::openai_compat::provider_error;
use crate::qubrid::reply_text_from_body;
use crate::{ChatCompletionRequest, ChatCompletionResponse, LlmMetrics, OpenAICompatibleClient};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use scenesense_core::{
    Credentials, GenerateRequest, GenerateResponse, QubridConfig, SceneSenseConfig,
};
use scenesense_error::{ConfigError, ModelsResult, ProviderErrorKind, SceneSenseResult};
use scenesense_interface::{ChatDriver, ProviderKind};
use tracing::{debug, instrument};

/// Alternate backend driver.
///
/// Whatever model identifier routed the call here, Qubrid is asked for its
/// configured upstream model with a fixed `top_p` and streaming disabled.
#[derive(Debug, Clone)]
pub struct QubridDriver {
    inner: OpenAICompatibleClient,
    upstream_model: String,
    top_p: f32,
}

impl QubridDriver {
    /// Creates a Qubrid driver with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: &QubridConfig) -> Self {
        Self {
            inner: OpenAICompatibleClient::new(
                api_key,
                config.endpoint().clone(),
                ProviderKind::Qubrid,
            ),
            upstream_model: config.upstream_model().clone(),
            top_p: *config.top_p(),
        }
    }

    /// Creates a Qubrid driver from loaded credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `QUBRID_API_KEY` is absent.
    #[instrument(skip_all)]
    pub fn from_credentials(
        credentials: &Credentials,
        config: &SceneSenseConfig,
    ) -> Result<Self, ConfigError> {
        let api_key = credentials.qubrid()?;
        Ok(Self::new(api_key, config.providers().qubrid()))
    }

    /// Model actually requested from Qubrid.
    pub fn upstream_model(&self) -> &str {
        &self.upstream_model
    }

    fn to_wire(&self, req: &GenerateRequest) -> ModelsResult<ChatCompletionRequest> {
        ChatCompletionRequest::builder()
            .model(self.upstream_model.clone())
            .messages(req.messages().clone())
            .temperature(*req.temperature())
            .max_tokens(*req.max_tokens())
            .top_p(self.top_p)
            .stream(false)
            .build()
            .map_err(|e| {
                provider_error(
                    ProviderKind::Qubrid,
                    ProviderErrorKind::RequestConversion(e.to_string()),
                )
            })
    }

    async fn complete(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let body = self.to_wire(req)?;
        let fail = |kind| provider_error(ProviderKind::Qubrid, kind);

        let response = self.inner.post(&body).await.map_err(fail)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let raw = response
            .text()
            .await
            .map_err(|e| fail(ProviderErrorKind::Transport(e.to_string())))?;

        let text = reply_text_from_body(&content_type, &raw).map_err(fail)?;
        if let Some(usage) = serde_json::from_str::<ChatCompletionResponse>(&raw)
            .ok()
            .and_then(|envelope| *envelope.usage())
        {
            LlmMetrics::get().record_tokens(ProviderKind::Qubrid, &self.upstream_model, &usage);
        }
        debug!(content_type = %content_type, text_len = text.len(), "Received Qubrid completion");
        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl ChatDriver for QubridDriver {
    #[instrument(skip(self, req), fields(provider = "qubrid", model = %self.upstream_model))]
    async fn generate(&self, req: &GenerateRequest) -> SceneSenseResult<GenerateResponse> {
        let timer = LlmMetrics::start(ProviderKind::Qubrid, &self.upstream_model);
        let outcome = self.complete(req).await;
        timer.finish(&outcome);
        Ok(outcome?)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Qubrid
    }
}
