//! Groq LPU inference driver using the OpenAI-compatible client.

use crate::openai_compat::provider_error;
use crate::{ChatCompletionRequest, ChatCompletionResponse, LlmMetrics, OpenAICompatibleClient};
use async_trait::async_trait;
use scenesense_core::{Credentials, GenerateRequest, GenerateResponse, GroqConfig, SceneSenseConfig};
use scenesense_error::{ConfigError, ModelsResult, ProviderErrorKind, SceneSenseResult};
use scenesense_interface::{ChatDriver, ProviderKind};
use tracing::{debug, instrument};

/// Primary backend driver.
///
/// The model identifier travels in each request, so one driver serves every
/// model Groq hosts.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    inner: OpenAICompatibleClient,
}

impl GroqDriver {
    /// Creates a Groq driver with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: &GroqConfig) -> Self {
        let inner =
            OpenAICompatibleClient::new(api_key, config.endpoint().clone(), ProviderKind::Groq);
        Self { inner }
    }

    /// Creates a Groq driver from loaded credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GROQ_API_KEY` is absent.
    #[instrument(skip_all)]
    pub fn from_credentials(
        credentials: &Credentials,
        config: &SceneSenseConfig,
    ) -> Result<Self, ConfigError> {
        let api_key = credentials.groq()?;
        Ok(Self::new(api_key, config.providers().groq()))
    }

    fn to_wire(req: &GenerateRequest) -> ModelsResult<ChatCompletionRequest> {
        ChatCompletionRequest::builder()
            .model(req.model().clone())
            .messages(req.messages().clone())
            .temperature(*req.temperature())
            .max_tokens(*req.max_tokens())
            .build()
            .map_err(|e| {
                provider_error(
                    ProviderKind::Groq,
                    ProviderErrorKind::RequestConversion(e.to_string()),
                )
            })
    }

    async fn complete(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let body = Self::to_wire(req)?;

        let response = self
            .inner
            .post(&body)
            .await
            .map_err(|kind| provider_error(ProviderKind::Groq, kind))?;

        let envelope: ChatCompletionResponse = response.json().await.map_err(|e| {
            provider_error(
                ProviderKind::Groq,
                ProviderErrorKind::ResponseParsing(e.to_string()),
            )
        })?;

        if let Some(usage) = envelope.usage() {
            LlmMetrics::get().record_tokens(ProviderKind::Groq, req.model(), usage);
        }

        let text = envelope.first_content();
        debug!(
            choices = envelope.choices().len(),
            text_len = text.len(),
            "Received Groq completion"
        );
        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl ChatDriver for GroqDriver {
    #[instrument(skip(self, req), fields(provider = "groq", model = %req.model()))]
    async fn generate(&self, req: &GenerateRequest) -> SceneSenseResult<GenerateResponse> {
        let timer = LlmMetrics::start(ProviderKind::Groq, req.model());
        let outcome = self.complete(req).await;
        timer.finish(&outcome);
        Ok(outcome?)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Groq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenesense_core::Message;

    #[test]
    fn test_to_wire_forwards_caller_model_and_parameters() {
        let req = GenerateRequest::builder()
            .messages(vec![Message::system("s"), Message::user("u")])
            .model("mixtral-8x7b-32768")
            .temperature(0.4f32)
            .max_tokens(1200u32)
            .build()
            .unwrap();

        let wire = GroqDriver::to_wire(&req).unwrap();
        assert_eq!(wire.model(), "mixtral-8x7b-32768");
        assert_eq!(wire.messages().len(), 2);
        assert_eq!(*wire.temperature(), Some(0.4));
        assert_eq!(*wire.max_tokens(), Some(1200));
        assert_eq!(*wire.top_p(), None);
    }
}
