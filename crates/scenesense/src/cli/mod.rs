//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scenesense binary.

mod analyze;
mod commands;
mod input;
mod ping;
mod risk;

pub use analyze::run_analyze;
pub use commands::{AnalyzeArgs, Cli, Commands, RiskArgs, SceneSource};
pub use ping::run_ping;
pub use risk::run_risk;
