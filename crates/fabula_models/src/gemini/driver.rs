//! Gemini generateContent driver.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use fabula_error::{BackendError, BackendErrorKind, FabulaResult};
use fabula_interface::StoryDriver;

use super::dto::{GeminiRequest, GeminiResponse};

const PROVIDER: &str = "gemini";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Driver for the Google Gemini generateContent API.
///
/// One synchronous request per call, authenticated with the `x-goog-api-key`
/// header; any transport or API failure is normalized into a
/// [`BackendError`]. The HTTP client carries an explicit timeout.
#[derive(Clone)]
pub struct GeminiDriver {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiDriver")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiDriver {
    /// Create a driver with the given API key, model, and request timeout.
    #[instrument(name = "gemini_driver_new", skip(api_key), fields(model = %model))]
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
impl StoryDriver for GeminiDriver {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> FabulaResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GeminiRequest::from_prompt(prompt);

        debug!(url = %url, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                BackendError::new(PROVIDER, BackendErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, "Gemini returned error status");
            return Err(
                BackendError::new(PROVIDER, BackendErrorKind::Api { status, message }).into(),
            );
        }

        let reply: GeminiResponse = response.json().await.map_err(|e| {
            BackendError::new(PROVIDER, BackendErrorKind::MalformedResponse(e.to_string()))
        })?;

        let text = reply
            .first_candidate_text()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| BackendError::new(PROVIDER, BackendErrorKind::EmptyOutput))?;

        debug!(response_len = text.len(), "generateContent successful");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
