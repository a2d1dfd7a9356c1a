//! Configuration error types.

/// Configuration error with source location.
///
/// Raised for missing credentials and unreadable configuration files. These
/// are fatal and reported before any network call is made.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenesense_error::ConfigError;
    ///
    /// let err = ConfigError::new("QUBRID_API_KEY not found. Add it to .env.");
    /// assert!(err.message.contains("QUBRID_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error for a credential that is absent or blank in the environment.
    #[track_caller]
    pub fn missing_credential(var: &str) -> Self {
        Self::new(format!("{} not found. Add it to .env.", var))
    }
}
