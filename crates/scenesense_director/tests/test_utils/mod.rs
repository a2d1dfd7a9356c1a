//! Test utilities for scene director tests.
//!
//! This module provides a scripted chat driver and request helpers.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockChatDriver};

use scenesense_core::{AnalysisRequest, Mode};

/// Scene used across dispatcher tests.
#[allow(dead_code)]
pub const CHASE_SCENE: &str =
    "EXT. MARKET - NIGHT\nRavi sprints through the crowd, vaults a cart, and leaps to a moving bus.";

/// Helper to build an analysis request for `model`.
#[allow(dead_code)]
pub fn create_test_request(model: &str, mode: Mode) -> AnalysisRequest {
    AnalysisRequest::builder()
        .scene_text(CHASE_SCENE)
        .mode(mode)
        .model(model)
        .build()
        .expect("Failed to build test request")
}
