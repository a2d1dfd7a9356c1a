//! SceneSense - screenplay scene analysis
//!
//! SceneSense prompts a chat model for a structured reading of a screenplay
//! scene (emotion, camera style, color palette, shot list, writer notes) and
//! recovers a JSON mapping from whatever text the model sends back.
//!
//! # Features
//!
//! - **Two backends**: Groq for every model, Qubrid for one reserved model identifier
//! - **Lenient parsing**: code fences, surrounding prose and trailing commas are tolerated
//! - **Fail-safe risk analysis**: production risk assessment that degrades to a sentinel
//! - **Layered configuration**: bundled defaults, user files, environment overrides
//!
//! # Quick Start
//!
//! ```no_run
//! use scenesense::{AnalysisRequest, Credentials, Mode, SceneDirector, SceneSenseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneSenseConfig::load()?;
//!     let director = SceneDirector::from_config(&config, &Credentials::from_env());
//!
//!     let request = AnalysisRequest::builder()
//!         .scene_text("INT. ATTIC - DAY. Dust hangs in the light.")
//!         .mode(Mode::Writer)
//!         .model("llama-3.1-8b-instant")
//!         .build()?;
//!
//!     let analysis = director.analyze(&request).await?;
//!     println!("{}", serde_json::to_string_pretty(&analysis)?);
//!
//!     let risk = director.risk_analyzer(config.risk()).analyze(request.scene_text()).await;
//!     println!("risk: {}", risk.overall_risk_level());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export error types
pub use scenesense_error::{
    ConfigError, DirectorError, DirectorErrorKind, JsonError, ModelsError, ModelsErrorKind,
    ProviderErrorKind, SceneSenseError, SceneSenseErrorKind, SceneSenseResult,
};

// Re-export core types
pub use scenesense_core::{
    AnalysisRequest, Credentials, GenerateRequest, GenerateResponse, Message, Mode, Role,
    SceneSenseConfig, init_console_telemetry,
};

// Re-export the driver trait
pub use scenesense_interface::{ChatDriver, ProviderKind};

// Re-export providers
pub use scenesense_models::{GroqDriver, QubridDriver};

// Re-export scene analysis
pub use scenesense_director::{
    AnalysisResult, ColorSwatch, DetectedRisk, ProviderRouter, RiskAnalyzer, RiskResult,
    SceneDirector, build_prompt, build_risk_prompt, clamp_confidence, clamp_intensity,
    extract_json_loose, normalize_hex,
};
