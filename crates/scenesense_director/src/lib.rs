//! Scene analysis for SceneSense.
//!
//! This crate turns screenplay scene text into a structured analysis by
//! prompting a chat model and coercing whatever comes back into JSON.
//!
//! # Pipeline
//!
//! 1. [`build_prompt`] renders the scene and the response schema for a [`Mode`](scenesense_core::Mode)
//! 2. [`SceneDirector`] routes the request to a backend by model identifier
//! 3. [`extract_json_loose`] recovers a JSON object from the reply text
//! 4. [`AnalysisResult`] exposes the mapping, with accessors that apply the
//!    value normalizers in [`normalize`]
//!
//! Risk analysis ([`RiskAnalyzer`]) follows the same shape but never fails:
//! every error degrades to [`RiskResult::unknown`].
//!
//! # Example
//!
//! ```no_run
//! use scenesense_core::{AnalysisRequest, Credentials, Mode, SceneSenseConfig};
//! use scenesense_director::SceneDirector;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SceneSenseConfig::load()?;
//! let director = SceneDirector::from_config(&config, &Credentials::from_env());
//!
//! let request = AnalysisRequest::builder()
//!     .scene_text("EXT. ROOFTOP - NIGHT. Rain. MAYA edges toward the ledge.")
//!     .mode(Mode::Director)
//!     .model("llama-3.1-8b-instant")
//!     .build()?;
//!
//! let analysis = director.analyze(&request).await?;
//! println!("intensity: {:?}", analysis.intensity());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod extraction;
pub mod normalize;
mod prompt;
mod result;
mod risk;

pub use dispatcher::{ProviderRouter, SceneDirector};
pub use extraction::{
    JsonMap, extract_json_loose, outermost_braces, remove_trailing_commas, strip_code_fences,
};
pub use normalize::{clamp_confidence, clamp_intensity, normalize_hex};
pub use prompt::{
    PING_SYSTEM_DIRECTIVE, PING_USER_TEXT, STRICT_JSON_DIRECTIVE, build_prompt, build_risk_prompt,
};
pub use result::{AnalysisResult, ColorSwatch, DetectedRisk, RiskResult, apply_key_aliases};
pub use risk::RiskAnalyzer;
