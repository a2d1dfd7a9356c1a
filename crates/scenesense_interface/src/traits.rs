//! Trait definitions for model backends.

use crate::ProviderKind;
use async_trait::async_trait;
use scenesense_core::{GenerateRequest, GenerateResponse};
use scenesense_error::SceneSenseResult;

/// Core trait that all chat-completion backends implement.
///
/// A driver sends role-tagged messages plus sampling parameters to a model
/// and returns the raw reply text. Drivers hold no per-call mutable state and
/// may be shared across concurrent calls.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Send the request and return the reply text.
    async fn generate(&self, req: &GenerateRequest) -> SceneSenseResult<GenerateResponse>;

    /// Which backend this driver talks to.
    fn provider(&self) -> ProviderKind;

    /// Provider name for logs and error messages.
    fn provider_name(&self) -> &'static str {
        self.provider().name()
    }
}
