//! Trait definitions for model backends and their one capability.

use async_trait::async_trait;
use fabula_error::FabulaResult;

/// Core trait that all model backends implement.
///
/// This is the single capability the pipeline needs: accept prompt text,
/// return the model's raw text reply or fail. Each backend normalizes its
/// underlying failures (subprocess timeout, transport error, API error)
/// into a [`fabula_error::BackendError`] before returning.
///
/// Backends are selected once at startup and injected; a fake
/// implementation substitutes for any of them in tests.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Send a rendered prompt to the model and return its raw text output.
    async fn complete(&self, prompt: &str) -> FabulaResult<String>;

    /// Provider name (e.g., "ollama", "openai", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3", "gpt-4o-mini").
    fn model_name(&self) -> &str;
}
