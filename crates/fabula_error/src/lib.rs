//! Error types for the Fabula story concept service.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions (where there are
//!   several)
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{FabulaResult, ParseError};
//!
//! fn decode_reply() -> FabulaResult<String> {
//!     Err(ParseError::new("unexpected end of input"))?
//! }
//!
//! match decode_reply() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod parse;
mod schema;
mod template;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use parse::ParseError;
pub use schema::SchemaError;
pub use template::TemplateError;
