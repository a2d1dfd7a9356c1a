//! Scene analysis error types.

/// Specific error conditions for scene analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DirectorErrorKind {
    /// Model text yielded no JSON object after every extraction strategy
    #[display("{} model returned non-JSON. Raw: {}...", provider, excerpt)]
    NonJsonOutput {
        /// Provider that produced the text
        provider: String,
        /// Leading slice of the raw model text
        excerpt: String,
    },
    /// Analysis request could not be assembled
    #[display("Invalid analysis request: {}", _0)]
    InvalidRequest(String),
}

/// Scene analysis error with location tracking.
///
/// # Examples
///
/// ```
/// use scenesense_error::{DirectorError, DirectorErrorKind};
///
/// let err = DirectorError::new(DirectorErrorKind::NonJsonOutput {
///     provider: "qubrid".to_string(),
///     excerpt: "I cannot help".to_string(),
/// });
/// assert!(err.to_string().contains("Raw: I cannot help..."));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Director Error: {} at line {} in {}", kind, line, file)]
pub struct DirectorError {
    kind: DirectorErrorKind,
    line: u32,
    file: &'static str,
}

impl DirectorError {
    /// Create a new director error with caller location tracking.
    #[track_caller]
    pub fn new(kind: DirectorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DirectorErrorKind {
        &self.kind
    }
}
