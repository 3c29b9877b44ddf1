//! Error types for model backend invocations.

/// Error kinds for backend operations.
///
/// The kinds are shared across all backend variants; the message carries the
/// provider-specific detail.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// Failed to spawn the model subprocess
    #[display("Failed to spawn model process: {}", _0)]
    Spawn(String),

    /// The backend call exceeded its time bound
    #[display("Backend call timed out after {}s", _0)]
    Timeout(u64),

    /// The model subprocess exited with a non-zero status
    #[display("Model process exited with {}: {}", status, stderr)]
    NonZeroExit {
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The backend produced no output text
    #[display("Backend returned empty output")]
    EmptyOutput,

    /// HTTP transport failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The remote API returned an error status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// The remote API reply did not have the expected wire shape
    #[display("Malformed API response: {}", _0)]
    MalformedResponse(String),
}

/// Backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new("ollama", BackendErrorKind::EmptyOutput);
/// assert!(format!("{}", err).contains("empty output"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error ({}): {} at line {} in {}", provider, kind, line, file)]
pub struct BackendError {
    /// Provider that produced the error ("ollama", "openai", "gemini")
    pub provider: &'static str,
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(provider: &'static str, kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            provider,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
