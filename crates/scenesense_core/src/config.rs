//! Layered TOML configuration.
//!
//! Sources, later ones taking precedence:
//! 1. Bundled defaults (`scenesense.toml` shipped with the crate)
//! 2. `~/.config/scenesense/scenesense.toml`
//! 3. `./scenesense.toml`
//! 4. `SCENESENSE__SECTION__KEY` environment variables
//!
//! Credentials are not part of this file; see [`Credentials`](crate::Credentials).

use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use scenesense_error::ConfigError;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../scenesense.toml");

/// Model routing rules.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct RoutingConfig {
    /// Reserved model identifier that routes to the alternate backend
    alternate_model: String,
}

/// Generation parameters used when a caller does not override them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct AnalysisDefaults {
    /// Sampling temperature
    temperature: f32,
    /// Token budget
    max_tokens: u32,
}

/// Fixed parameters of the risk-analysis flow.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct RiskConfig {
    /// Lower-cost model used for every risk call
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Token budget
    max_tokens: u32,
}

/// Primary provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct GroqConfig {
    /// Chat-completions URL
    endpoint: String,
}

/// Alternate provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct QubridConfig {
    /// Chat-completions URL
    endpoint: String,
    /// Model actually requested from Qubrid, whatever the caller asked for
    upstream_model: String,
    /// Nucleus sampling parameter sent with every request
    top_p: f32,
}

/// Settings for every provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct ProvidersConfig {
    /// Primary provider
    groq: GroqConfig,
    /// Alternate provider
    qubrid: QubridConfig,
}

/// Top-level SceneSense configuration.
///
/// # Example
///
/// ```
/// use scenesense_core::SceneSenseConfig;
///
/// let config = SceneSenseConfig::bundled().unwrap();
/// assert_eq!(config.routing().alternate_model(), "llama-3.3-70b-versatile");
/// assert_eq!(*config.risk().max_tokens(), 800);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct SceneSenseConfig {
    /// Model routing rules
    routing: RoutingConfig,
    /// Analysis defaults
    analysis: AnalysisDefaults,
    /// Risk-analysis parameters
    risk: RiskConfig,
    /// Provider endpoints
    providers: ProvidersConfig,
}

impl SceneSenseConfig {
    /// Bundled defaults only, ignoring user files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to deserialize.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::finish(Self::defaults())
    }

    /// Bundled defaults overlaid with a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if `toml` is malformed or has wrongly typed values.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Bundled defaults overlaid with a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Self::finish(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load every configuration layer.
    ///
    /// User files are optional and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present layer cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scenesense/scenesense.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("scenesense").required(false))
            .add_source(
                Environment::with_prefix("SCENESENSE")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }
}
