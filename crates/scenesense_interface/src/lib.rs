//! Trait definitions for the SceneSense scene analysis library.
//!
//! This crate provides the capability trait every model backend implements
//! and the closed set of backends the dispatcher routes between.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::ChatDriver;
pub use types::ProviderKind;
