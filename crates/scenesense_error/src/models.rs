//! Model provider errors.

/// Failure conditions shared by every chat-completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The request never produced a response (DNS, TLS, connection reset)
    #[display("Request failed: {}", _0)]
    Transport(String),

    /// The provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned with the status
        message: String,
    },

    /// The response envelope could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// The outgoing request could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestConversion(String),
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Groq (primary provider) error
    #[display("Groq API call failed: {}", _0)]
    Groq(ProviderErrorKind),

    /// Qubrid (alternate provider) error
    #[display("Qubrid API call failed: {}", _0)]
    Qubrid(ProviderErrorKind),
}

impl ModelsErrorKind {
    /// HTTP status attached to this failure, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ModelsErrorKind::Groq(ProviderErrorKind::Api { status, .. })
            | ModelsErrorKind::Qubrid(ProviderErrorKind::Api { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use scenesense_error::{ModelsError, ModelsErrorKind, ProviderErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Qubrid(ProviderErrorKind::Api {
///     status: 503,
///     message: "upstream unavailable".to_string(),
/// }));
/// assert_eq!(err.kind.status(), Some(503));
/// assert!(err.to_string().contains("Qubrid API call failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
