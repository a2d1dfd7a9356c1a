//! OpenAI-compatible chat-completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use scenesense_core::Message;
use serde::{Deserialize, Serialize};

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Role-tagged messages
    messages: Vec<Message>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Nucleus sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Streaming flag; always false when set
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Message inside a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoiceMessage {
    /// Reply text; some providers send null for tool-only turns
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    message: ChatChoiceMessage,
}

/// Token accounting reported alongside a completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct Usage {
    /// Tokens in the prompt
    prompt_tokens: u64,
    /// Tokens generated
    completion_tokens: u64,
}

impl Usage {
    /// Usage with the given counts.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }
}

/// Chat-completions response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices, first is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token usage, when the provider reports it
    #[serde(default)]
    usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or an empty string when there is none.
    pub fn first_content(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_options() {
        let request = ChatCompletionRequest::builder()
            .model("llama-3.1-8b-instant")
            .messages(vec![Message::user("hi")])
            .build()
            .unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["messages"][0]["role"], "user");
        assert!(body.get("top_p").is_none());
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn test_first_content_handles_missing_choices() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_content(), "");
        assert!(response.usage().is_none());

        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"{\"a\":1}"}}]}"#)
                .unwrap();
        assert_eq!(response.first_content(), r#"{"a":1}"#);
    }

    #[test]
    fn test_usage_is_parsed() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[],"usage":{"prompt_tokens":40,"completion_tokens":7,"total_tokens":47}}"#,
        )
        .unwrap();
        assert_eq!(response.usage(), &Some(Usage::new(40, 7)));
    }
}
