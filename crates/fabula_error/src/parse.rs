//! JSON parse error types.

/// Error for model output that is not valid JSON after sanitization.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", message, line, file)]
pub struct ParseError {
    /// The underlying parse failure message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::ParseError;
    ///
    /// let err = ParseError::new("expected value at line 1 column 1");
    /// assert!(err.message.contains("expected value"));
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
}
