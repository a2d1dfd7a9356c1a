//! Provider credentials.

use scenesense_error::ConfigError;

/// API keys for the two backends, read once and never mutated.
///
/// Values are trimmed and blank values count as absent. Neither key is
/// required up front; the one a call needs is demanded when that call is
/// dispatched, before any network traffic.
///
/// # Examples
///
/// ```
/// use scenesense_core::Credentials;
///
/// let creds = Credentials::new(Some("  gsk_live  ".to_string()), Some("".to_string()));
/// assert_eq!(creds.groq().unwrap(), "gsk_live");
/// assert!(creds.qubrid().is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    groq_api_key: Option<String>,
    qubrid_api_key: Option<String>,
}

impl Credentials {
    /// Environment variable holding the primary-provider key.
    pub const GROQ_API_KEY: &'static str = "GROQ_API_KEY";
    /// Environment variable holding the alternate-provider key.
    pub const QUBRID_API_KEY: &'static str = "QUBRID_API_KEY";

    /// Build from explicit values.
    pub fn new(groq_api_key: Option<String>, qubrid_api_key: Option<String>) -> Self {
        Self {
            groq_api_key: clean(groq_api_key),
            qubrid_api_key: clean(qubrid_api_key),
        }
    }

    /// Read keys from the process environment after loading `.env`.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(lookup(Self::GROQ_API_KEY), lookup(Self::QUBRID_API_KEY))
    }

    /// Primary-provider key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming `GROQ_API_KEY` when absent.
    pub fn groq(&self) -> Result<&str, ConfigError> {
        self.groq_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::missing_credential(Self::GROQ_API_KEY))
    }

    /// Alternate-provider key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming `QUBRID_API_KEY` when absent.
    pub fn qubrid(&self) -> Result<&str, ConfigError> {
        self.qubrid_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::missing_credential(Self::QUBRID_API_KEY))
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |key: &Option<String>| if key.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("groq_api_key", &mask(&self.groq_api_key))
            .field("qubrid_api_key", &mask(&self.qubrid_api_key))
            .finish()
    }
}
