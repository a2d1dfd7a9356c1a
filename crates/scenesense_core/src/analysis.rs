//! Scene analysis request.

use crate::Mode;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default sampling temperature for scene analysis.
pub(crate) const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Default token budget for scene analysis.
pub(crate) const DEFAULT_MAX_TOKENS: u32 = 1200;

/// One scene analysis call. Immutable once built.
///
/// # Examples
///
/// ```
/// use scenesense_core::{AnalysisRequest, Mode};
///
/// let request = AnalysisRequest::builder()
///     .scene_text("INT. DINER - NIGHT. Two strangers share a booth.")
///     .mode(Mode::Writer)
///     .model("llama-3.1-8b-instant")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.mode(), Mode::Writer);
/// assert_eq!(*request.max_tokens(), 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnalysisRequest {
    /// Raw screenplay excerpt
    scene_text: String,
    /// Operating mode
    #[builder(default)]
    mode: Mode,
    /// Model identifier, also used to pick the provider
    model: String,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Maximum number of tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
}

impl AnalysisRequest {
    /// Creates a new builder for `AnalysisRequest`.
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}
