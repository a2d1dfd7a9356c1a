//! Request and response types for chat completions.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Provider-neutral chat completion request.
///
/// # Examples
///
/// ```
/// use scenesense_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello")])
///     .model("llama-3.1-8b-instant")
///     .temperature(0.2f32)
///     .max_tokens(800u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(800));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Model identifier to use
    model: String,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Raw text reply from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Reply text exactly as the provider returned it
    text: String,
}

impl GenerateResponse {
    /// Wrap reply text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Take the reply text.
    pub fn into_text(self) -> String {
        self.text
    }
}
