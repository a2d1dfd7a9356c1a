//! Chat-completion provider integrations for SceneSense.
//!
//! Two backends implement [`ChatDriver`](scenesense_interface::ChatDriver):
//!
//! - **Groq** - primary backend, OpenAI-compatible chat completions
//! - **Qubrid** - alternate backend reached over raw HTTPS, serving one
//!   reserved model identifier
//!
//! # Example
//!
//! ```no_run
//! use scenesense_core::{Credentials, GenerateRequest, Message, SceneSenseConfig};
//! use scenesense_interface::ChatDriver;
//! use scenesense_models::GroqDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SceneSenseConfig::load()?;
//! let driver = GroqDriver::from_credentials(&Credentials::from_env(), &config)?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Reply with OK")])
//!     .model("llama-3.1-8b-instant")
//!     .build()?;
//! let response = driver.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod groq;
mod metrics;
mod openai_compat;
mod qubrid;

pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, Usage,
};
pub use groq::GroqDriver;
pub use metrics::{CallTimer, LlmMetrics, classify_error};
pub use openai_compat::OpenAICompatibleClient;
pub use qubrid::{QubridDriver, reply_text_from_body};
