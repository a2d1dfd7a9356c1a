//! Core data types for the SceneSense scene analysis library.
//!
//! This crate provides the request, message and configuration types shared
//! by the provider drivers and the scene director.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod credentials;
mod message;
mod mode;
mod request;
mod role;
mod telemetry;

pub use analysis::{AnalysisRequest, AnalysisRequestBuilder, AnalysisRequestBuilderError};
pub use config::{
    AnalysisDefaults, GroqConfig, ProvidersConfig, QubridConfig, RiskConfig, RoutingConfig,
    SceneSenseConfig,
};
pub use credentials::Credentials;
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use mode::Mode;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
pub use telemetry::init_console_telemetry;
