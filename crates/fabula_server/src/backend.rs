//! Driver construction from resolved configuration.

use std::sync::Arc;

use tracing::info;

use fabula_error::{ConfigError, FabulaResult};
use fabula_interface::StoryDriver;
use fabula_models::{GeminiDriver, OllamaDriver, OpenAiDriver};

use crate::{BackendKind, ServerConfig};

/// Build the configured backend driver.
///
/// Called once at startup; the returned driver is injected into the router
/// state and shared read-only across requests. API keys are validated here
/// so a misconfigured deployment fails at boot, not on the first request.
pub fn build_driver(config: &ServerConfig) -> FabulaResult<Arc<dyn StoryDriver>> {
    let driver: Arc<dyn StoryDriver> = match config.backend {
        BackendKind::Ollama => Arc::new(
            OllamaDriver::new(&config.ollama_model).with_timeout(config.timeout),
        ),
        BackendKind::OpenAi => {
            let api_key = config
                .openai_api_key
                .clone()
                .ok_or_else(|| ConfigError::new("OPENAI_API_KEY not set"))?;
            Arc::new(OpenAiDriver::new(
                api_key,
                config.openai_model.clone(),
                config.timeout,
            )?)
        }
        BackendKind::Gemini => {
            let api_key = config
                .gemini_api_key
                .clone()
                .ok_or_else(|| ConfigError::new("GEMINI_API_KEY not set"))?;
            Arc::new(GeminiDriver::new(
                api_key,
                config.gemini_model.clone(),
                config.timeout,
            )?)
        }
    };

    info!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        "Model backend ready"
    );
    Ok(driver)
}
