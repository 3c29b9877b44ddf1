//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, ParseError, SchemaError, TemplateError};

/// The foundation error enum covering every failure the pipeline can
/// produce: template rendering, backend invocation, JSON parsing, schema
/// validation, and startup configuration.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, SchemaError};
///
/// let schema_err = SchemaError::new("stories is not an array");
/// let err: FabulaError = schema_err.into();
/// assert!(format!("{}", err).contains("Schema Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Model backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// JSON parse error
    #[from(ParseError)]
    Parse(ParseError),
    /// Story schema validation error
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, ConfigError};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, ParseError};
///
/// fn decode() -> FabulaResult<String> {
///     Err(ParseError::new("not valid JSON"))?
/// }
/// ```
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
