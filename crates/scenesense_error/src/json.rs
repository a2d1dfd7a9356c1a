//! JSON error types.

/// JSON serialization/deserialization error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A model reply parsed as JSON but did not fit the `target` shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenesense_error::JsonError;
    ///
    /// let err = JsonError::reply_shape("RiskResult", "missing field `justification`");
    /// assert_eq!(
    ///     err.message,
    ///     "Model reply did not match RiskResult: missing field `justification`"
    /// );
    /// ```
    #[track_caller]
    pub fn reply_shape(target: &str, err: impl std::fmt::Display) -> Self {
        Self::new(format!("Model reply did not match {}: {}", target, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_shape_records_caller_location() {
        let err = JsonError::reply_shape("RiskResult", "invalid type: string, expected f32");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("JSON Error: Model reply did not match RiskResult"));
    }
}
