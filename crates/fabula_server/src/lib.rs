//! HTTP surface for the Fabula story concept service.
//!
//! One endpoint, `POST /api/story`, accepting the five writer-supplied
//! fields and returning either a validated story set or a uniform JSON
//! error payload. The model backend is selected once at startup from
//! configuration and injected into the router state; requests share no
//! mutable state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod pipeline;
mod routes;

pub use backend::build_driver;
pub use config::{BackendKind, ServerConfig};
pub use pipeline::{generate_stories, PipelineError};
pub use routes::app;
