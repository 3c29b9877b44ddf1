//! Model backend drivers for the Fabula story concept service.
//!
//! Three interchangeable backends implement
//! [`fabula_interface::StoryDriver`]:
//!
//! - [`OllamaDriver`] — runs the local `ollama` CLI as a subprocess
//! - [`OpenAiDriver`] — OpenAI chat completions over HTTPS
//! - [`GeminiDriver`] — Google Gemini generateContent over HTTPS
//!
//! Exactly one is active per deployment; the selection is a startup-time
//! configuration decision made by the server crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod ollama;
mod openai;

pub use gemini::GeminiDriver;
pub use ollama::OllamaDriver;
pub use openai::OpenAiDriver;
