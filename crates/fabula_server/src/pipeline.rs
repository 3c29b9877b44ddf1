//! The per-request pipeline: render, dispatch, sanitize, parse, validate.

use tracing::{debug, error, instrument};

use fabula_core::{extract_story_set, render_prompt, ErrorResult, StoryRequest, StorySet};
use fabula_error::FabulaError;
use fabula_interface::StoryDriver;

/// A pipeline failure: the caller-facing [`ErrorResult`] plus the
/// underlying error, kept so the HTTP layer can pick a status code.
#[derive(Debug)]
pub struct PipelineError {
    /// Well-formed failure payload for the caller
    pub result: ErrorResult,
    /// The error that produced it
    pub error: FabulaError,
}

impl PipelineError {
    fn new(error: FabulaError) -> Self {
        Self {
            result: ErrorResult::new(error.to_string()),
            error,
        }
    }

    fn with_raw(error: FabulaError, raw: &str) -> Self {
        Self {
            result: ErrorResult::new(error.to_string()).with_raw(raw),
            error,
        }
    }
}

/// Run one request through the full pipeline.
///
/// Exactly one outbound call per invocation. Every failure converges to a
/// [`PipelineError`] whose payload is well-formed JSON; raw backend text is
/// attached whenever a reply existed, so unreliable model output stays
/// diagnosable. No error propagates outward unhandled.
#[instrument(skip_all, fields(provider = driver.provider_name(), model = driver.model_name()))]
pub async fn generate_stories(
    driver: &dyn StoryDriver,
    request: &StoryRequest,
) -> Result<StorySet, PipelineError> {
    let prompt = render_prompt(request).map_err(|e| {
        error!(error = %e, "Prompt rendering failed");
        PipelineError::new(e.into())
    })?;
    debug!(prompt_len = prompt.len(), "Prompt rendered");

    let raw = driver.complete(&prompt).await.map_err(|e| {
        error!(error = %e, "Backend call failed");
        PipelineError::new(e)
    })?;
    debug!(raw_len = raw.len(), "Backend reply received");

    let set = extract_story_set(&raw).map_err(|e| {
        error!(error = %e, "Reply rejected");
        PipelineError::with_raw(e, &raw)
    })?;

    debug!(stories = set.stories.len(), "Story set validated");
    Ok(set)
}
