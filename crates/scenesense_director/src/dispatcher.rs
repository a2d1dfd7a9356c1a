//! Model-identifier routing and the scene analysis flow.

use crate::{
    AnalysisResult, PING_SYSTEM_DIRECTIVE, PING_USER_TEXT, RiskAnalyzer, STRICT_JSON_DIRECTIVE,
    apply_key_aliases, build_prompt, extract_json_loose,
};
use scenesense_core::{
    AnalysisRequest, Credentials, GenerateRequest, Message, RiskConfig, SceneSenseConfig,
};
use scenesense_error::{ConfigError, DirectorError, DirectorErrorKind, SceneSenseResult};
use scenesense_interface::{ChatDriver, ProviderKind};
use scenesense_models::{GroqDriver, QubridDriver};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Characters of raw model text quoted in a non-JSON error.
pub(crate) const EXCERPT_CHARS: usize = 200;

/// Maps model identifiers to backends.
///
/// Reserved identifiers route to their registered backend; every other
/// identifier routes to the fallback, unvalidated.
///
/// # Examples
///
/// ```
/// use scenesense_director::ProviderRouter;
/// use scenesense_interface::ProviderKind;
///
/// let router = ProviderRouter::default().reserve("llama-3.3-70b-versatile", ProviderKind::Qubrid);
/// assert_eq!(router.route("llama-3.3-70b-versatile"), ProviderKind::Qubrid);
/// assert_eq!(router.route("mixtral-8x7b-32768"), ProviderKind::Groq);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderRouter {
    reserved: HashMap<String, ProviderKind>,
    fallback: ProviderKind,
}

impl Default for ProviderRouter {
    fn default() -> Self {
        Self {
            reserved: HashMap::new(),
            fallback: ProviderKind::Groq,
        }
    }
}

impl ProviderRouter {
    /// Router with the configured alternate identifier reserved for Qubrid.
    pub fn from_config(config: &SceneSenseConfig) -> Self {
        Self::default().reserve(config.routing().alternate_model().clone(), ProviderKind::Qubrid)
    }

    /// Reserve `model` for `provider`.
    pub fn reserve(mut self, model: impl Into<String>, provider: ProviderKind) -> Self {
        self.reserved.insert(model.into(), provider);
        self
    }

    /// Backend serving `model`. Matching is exact.
    pub fn route(&self, model: &str) -> ProviderKind {
        self.reserved.get(model).copied().unwrap_or(self.fallback)
    }
}

/// Dispatches scene analysis to the backend a model identifier routes to.
///
/// Holds only immutable state after construction, so one director can serve
/// concurrent calls. A backend whose credential is missing is simply not
/// registered; calls routed to it fail with a configuration error before any
/// network traffic.
#[derive(Clone)]
pub struct SceneDirector {
    router: ProviderRouter,
    drivers: HashMap<ProviderKind, Arc<dyn ChatDriver>>,
}

impl std::fmt::Debug for SceneDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut providers: Vec<_> = self.drivers.keys().collect();
        providers.sort();
        f.debug_struct("SceneDirector")
            .field("router", &self.router)
            .field("providers", &providers)
            .finish()
    }
}

impl SceneDirector {
    /// Director without any registered backend.
    pub fn new(router: ProviderRouter) -> Self {
        Self {
            router,
            drivers: HashMap::new(),
        }
    }

    /// Director with a driver for every provider whose credential is set.
    #[instrument(skip_all)]
    pub fn from_config(config: &SceneSenseConfig, credentials: &Credentials) -> Self {
        let mut director = Self::new(ProviderRouter::from_config(config));

        match GroqDriver::from_credentials(credentials, config) {
            Ok(driver) => director = director.with_driver(Arc::new(driver)),
            Err(e) => debug!(error = %e, "Groq driver not registered"),
        }
        match QubridDriver::from_credentials(credentials, config) {
            Ok(driver) => director = director.with_driver(Arc::new(driver)),
            Err(e) => debug!(error = %e, "Qubrid driver not registered"),
        }

        info!(providers = director.drivers.len(), "Scene director ready");
        director
    }

    /// Register `driver` for the provider it reports, replacing any previous one.
    pub fn with_driver(mut self, driver: Arc<dyn ChatDriver>) -> Self {
        self.drivers.insert(driver.provider(), driver);
        self
    }

    /// Backend that `model` routes to.
    pub fn route(&self, model: &str) -> ProviderKind {
        self.router.route(model)
    }

    /// Driver registered for `provider`, if any.
    pub fn driver(&self, provider: ProviderKind) -> Option<Arc<dyn ChatDriver>> {
        self.drivers.get(&provider).cloned()
    }

    fn driver_for(&self, model: &str) -> Result<&Arc<dyn ChatDriver>, ConfigError> {
        let provider = self.route(model);
        self.drivers
            .get(&provider)
            .ok_or_else(|| ConfigError::missing_credential(provider.credential_var()))
    }

    /// Analyze a scene and return the recovered mapping.
    ///
    /// # Errors
    ///
    /// - Configuration error if the routed provider has no credential
    /// - Models error on transport failure or a non-success status
    /// - Director error if the reply contains no JSON object
    #[instrument(
        skip(self, request),
        fields(model = %request.model(), mode = %request.mode(), scene_len = request.scene_text().len())
    )]
    pub async fn analyze(&self, request: &AnalysisRequest) -> SceneSenseResult<AnalysisResult> {
        let driver = self.driver_for(request.model())?;
        let provider = driver.provider_name();
        debug!(provider, "Routed analysis request");

        let prompt = build_prompt(request.scene_text(), *request.mode());
        let generate = GenerateRequest::builder()
            .messages(vec![
                Message::system(STRICT_JSON_DIRECTIVE),
                Message::user(prompt),
            ])
            .model(request.model().clone())
            .temperature(*request.temperature())
            .max_tokens(*request.max_tokens())
            .build()
            .map_err(|e| {
                DirectorError::new(DirectorErrorKind::InvalidRequest(e.to_string()))
            })?;

        let response = driver.generate(&generate).await?;
        let raw = response.text();

        let Some(mut map) = extract_json_loose(raw) else {
            warn!(provider, raw_len = raw.len(), "Model returned non-JSON");
            return Err(DirectorError::new(DirectorErrorKind::NonJsonOutput {
                provider: provider.to_string(),
                excerpt: excerpt(raw),
            })
            .into());
        };

        apply_key_aliases(&mut map);
        info!(provider, keys = map.len(), "Scene analysis complete");
        Ok(AnalysisResult::new(map))
    }

    /// Ask the routed backend to reply with `OK` and return its raw text.
    ///
    /// # Errors
    ///
    /// Same configuration and models errors as [`analyze`](Self::analyze).
    #[instrument(skip(self))]
    pub async fn ping(&self, model: &str) -> SceneSenseResult<String> {
        let driver = self.driver_for(model)?;
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(PING_SYSTEM_DIRECTIVE),
                Message::user(PING_USER_TEXT),
            ])
            .model(model)
            .temperature(0.0f32)
            .max_tokens(5u32)
            .build()
            .map_err(|e| {
                DirectorError::new(DirectorErrorKind::InvalidRequest(e.to_string()))
            })?;

        let reply = driver.generate(&request).await?.into_text();
        info!(provider = driver.provider_name(), reply = %reply.trim(), "Ping answered");
        Ok(reply)
    }

    /// Risk analyzer sharing this director's primary-backend driver.
    pub fn risk_analyzer(&self, config: &RiskConfig) -> RiskAnalyzer {
        RiskAnalyzer::from_config(self.driver(ProviderKind::Groq), config)
    }
}

/// First [`EXCERPT_CHARS`] characters of `raw`, cut on a char boundary.
pub(crate) fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let raw = "é".repeat(300);
        let cut = excerpt(&raw);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS);
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_router_exact_match_only() {
        let router = ProviderRouter::default().reserve("reserved", ProviderKind::Qubrid);
        assert_eq!(router.route("reserved"), ProviderKind::Qubrid);
        assert_eq!(router.route("Reserved"), ProviderKind::Groq);
        assert_eq!(router.route(""), ProviderKind::Groq);
    }

    #[test]
    fn test_router_from_bundled_config() {
        let config = SceneSenseConfig::bundled().unwrap();
        let router = ProviderRouter::from_config(&config);
        assert_eq!(router.route("llama-3.3-70b-versatile"), ProviderKind::Qubrid);
        assert_eq!(router.route("llama-3.1-8b-instant"), ProviderKind::Groq);
    }

    #[test]
    fn test_from_config_registers_only_credentialed_providers() {
        let config = SceneSenseConfig::bundled().unwrap();
        let director =
            SceneDirector::from_config(&config, &Credentials::new(Some("gsk".into()), None));
        assert!(director.driver(ProviderKind::Groq).is_some());
        assert!(director.driver(ProviderKind::Qubrid).is_none());

        let Err(err) = director.driver_for("llama-3.3-70b-versatile") else {
            panic!("expected missing credential");
        };
        assert!(err.message.contains("QUBRID_API_KEY"));
    }
}
