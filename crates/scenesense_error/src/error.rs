//! Top-level error wrapper types.

use crate::{ConfigError, DirectorError, JsonError, ModelsError};

/// Every failure the SceneSense crates can surface.
///
/// # Examples
///
/// ```
/// use scenesense_error::{ConfigError, SceneSenseError, SceneSenseErrorKind};
///
/// let err: SceneSenseError = ConfigError::new("GROQ_API_KEY not found").into();
/// assert!(matches!(err.kind(), SceneSenseErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SceneSenseErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error (missing credential, unreadable config)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Provider transport or API error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Scene analysis error (malformed model output)
    #[from(DirectorError)]
    Director(DirectorError),
}

/// SceneSense error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenesense_error::{ConfigError, SceneSenseResult};
///
/// fn might_fail() -> SceneSenseResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SceneSense Error: {}", _0)]
pub struct SceneSenseError(Box<SceneSenseErrorKind>);

impl SceneSenseError {
    /// Create a new error from a kind.
    pub fn new(kind: SceneSenseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SceneSenseErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SceneSenseErrorKind
impl<T> From<T> for SceneSenseError
where
    T: Into<SceneSenseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SceneSense operations.
pub type SceneSenseResult<T> = std::result::Result<T, SceneSenseError>;
