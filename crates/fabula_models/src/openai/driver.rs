//! OpenAI chat completions driver.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use fabula_error::{BackendError, BackendErrorKind, FabulaResult};
use fabula_interface::StoryDriver;

use super::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

const PROVIDER: &str = "openai";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Driver for the hosted OpenAI chat completions API.
///
/// One synchronous request per call; any transport or API failure is
/// normalized into a [`BackendError`]. The HTTP client carries an explicit
/// timeout rather than relying on transport defaults.
#[derive(Clone)]
pub struct OpenAiDriver {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiDriver")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiDriver {
    /// Create a driver with the given API key, model, and request timeout.
    #[instrument(name = "openai_driver_new", skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String, timeout: Duration) -> FabulaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::new(PROVIDER, BackendErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL. Used by tests against a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl StoryDriver for OpenAiDriver {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> FabulaResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: None,
            temperature: None,
        };

        debug!(url = %url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                BackendError::new(PROVIDER, BackendErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, "OpenAI returned error status");
            return Err(
                BackendError::new(PROVIDER, BackendErrorKind::Api { status, message }).into(),
            );
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            BackendError::new(PROVIDER, BackendErrorKind::MalformedResponse(e.to_string()))
        })?;

        let text = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                BackendError::new(
                    PROVIDER,
                    BackendErrorKind::MalformedResponse("response has no choices".to_string()),
                )
            })?;

        if text.is_empty() {
            return Err(BackendError::new(PROVIDER, BackendErrorKind::EmptyOutput).into());
        }

        debug!(response_len = text.len(), "Chat completion successful");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
