//! Fail-safe production risk analysis.
//!
//! Unlike scene analysis, this flow is advisory: [`RiskAnalyzer::analyze`]
//! never returns an error. Missing credentials, transport failures,
//! non-JSON replies and wrongly shaped JSON all degrade to
//! [`RiskResult::unknown`].

use crate::dispatcher::excerpt;
use crate::{RiskResult, build_risk_prompt, extract_json_loose};
use scenesense_core::{GenerateRequest, Message, RiskConfig};
use scenesense_error::{
    ConfigError, DirectorError, DirectorErrorKind, JsonError, SceneSenseResult,
};
use scenesense_interface::{ChatDriver, ProviderKind};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Risk analysis against the primary backend with a fixed model and budget.
#[derive(Clone)]
pub struct RiskAnalyzer {
    driver: Option<Arc<dyn ChatDriver>>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl std::fmt::Debug for RiskAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskAnalyzer")
            .field("provider", &self.driver.as_ref().map(|d| d.provider_name()))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl RiskAnalyzer {
    /// Analyzer with explicit parameters. `None` means no credential was found.
    pub fn new(
        driver: Option<Arc<dyn ChatDriver>>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            driver,
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Analyzer using the configured risk model and budget.
    pub fn from_config(driver: Option<Arc<dyn ChatDriver>>, config: &RiskConfig) -> Self {
        Self::new(
            driver,
            config.model().clone(),
            *config.temperature(),
            *config.max_tokens(),
        )
    }

    /// Model every risk call uses.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Assess production risk for `scene_text`.
    ///
    /// Always returns a result; failures yield the `Unknown` sentinel with the
    /// error text in its justification.
    #[instrument(skip(self, scene_text), fields(model = %self.model, scene_len = scene_text.len()))]
    pub async fn analyze(&self, scene_text: &str) -> RiskResult {
        match self.try_analyze(scene_text).await {
            Ok(result) => {
                info!(level = %result.overall_risk_level(), risks = result.detected_risks().len(), "Risk analysis complete");
                result
            }
            Err(e) => {
                warn!(error = %e, "Risk analysis degraded to sentinel");
                RiskResult::unknown(e)
            }
        }
    }

    async fn try_analyze(&self, scene_text: &str) -> SceneSenseResult<RiskResult> {
        let driver = self
            .driver
            .as_ref()
            .ok_or_else(|| ConfigError::missing_credential(ProviderKind::Groq.credential_var()))?;

        let request = GenerateRequest::builder()
            .messages(vec![Message::user(build_risk_prompt(scene_text))])
            .model(self.model.clone())
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| DirectorError::new(DirectorErrorKind::InvalidRequest(e.to_string())))?;

        let response = driver.generate(&request).await?;
        let raw = response.text();

        let map = extract_json_loose(raw).ok_or_else(|| {
            DirectorError::new(DirectorErrorKind::NonJsonOutput {
                provider: driver.provider_name().to_string(),
                excerpt: excerpt(raw),
            })
        })?;

        let result: RiskResult = serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|e| JsonError::reply_shape("RiskResult", e))?;
        Ok(result.normalized())
    }
}
