//! Error types for the SceneSense library.
//!
//! This crate provides the foundation error types used throughout the SceneSense workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scenesense_error::{ConfigError, SceneSenseResult};
//!
//! fn load_key() -> SceneSenseResult<String> {
//!     Err(ConfigError::new("GROQ_API_KEY not found. Add it to .env."))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod director;
mod error;
mod json;
mod models;

pub use config::ConfigError;
pub use director::{DirectorError, DirectorErrorKind};
pub use error::{SceneSenseError, SceneSenseErrorKind, SceneSenseResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult, ProviderErrorKind};
