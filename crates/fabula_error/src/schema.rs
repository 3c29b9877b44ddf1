//! Story schema validation error types.

/// Error for parsed JSON that does not satisfy the story set contract.
///
/// The message names the first offending field so callers can see exactly
/// which part of the model's reply was malformed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", message, line, file)]
pub struct SchemaError {
    /// Description of the contract violation
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::SchemaError;
    ///
    /// let err = SchemaError::new("response has no \"stories\" array");
    /// assert!(err.message.contains("stories"));
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
