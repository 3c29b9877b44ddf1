//! Local Ollama CLI backend.
//!
//! Invokes `ollama run <model> <prompt>` as a subprocess and captures
//! standard output as the model's reply. The call is bounded by an explicit
//! timeout (120 seconds by default); on expiry the child process is killed
//! and the call fails rather than hanging. Exit status and stderr are
//! inspected so a failing invocation produces a diagnosable error instead
//! of an empty reply.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use fabula_error::{BackendError, BackendErrorKind, FabulaResult};
use fabula_interface::StoryDriver;

const PROVIDER: &str = "ollama";

/// Default upper bound on a single model invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Driver that runs a local model through the `ollama` command-line tool.
#[derive(Debug, Clone)]
pub struct OllamaDriver {
    /// Command to invoke (normally "ollama"; injectable for tests)
    command: String,
    /// Model name (e.g., "llama3", "mistral")
    model: String,
    /// Upper bound on the subprocess runtime
    timeout: Duration,
}

impl OllamaDriver {
    /// Create a driver for the given model with the default command and
    /// timeout.
    #[instrument(name = "ollama_driver_new", skip_all, fields(model = %model.as_ref()))]
    pub fn new(model: impl AsRef<str>) -> Self {
        Self {
            command: "ollama".to_string(),
            model: model.as_ref().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the command name. Used by tests to substitute a stub
    /// executable for the real CLI.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Override the invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl StoryDriver for OllamaDriver {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> FabulaResult<String> {
        debug!("Spawning ollama subprocess");

        let child = Command::new(&self.command)
            .arg("run")
            .arg(&self.model)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!(error = %e, "Failed to spawn ollama");
                BackendError::new(PROVIDER, BackendErrorKind::Spawn(e.to_string()))
            })?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| {
                BackendError::new(PROVIDER, BackendErrorKind::Spawn(e.to_string()))
            })?,
            Err(_) => {
                // Dropping the wait future kills the child (kill_on_drop).
                warn!(timeout_secs = self.timeout.as_secs(), "Ollama call timed out");
                return Err(BackendError::new(
                    PROVIDER,
                    BackendErrorKind::Timeout(self.timeout.as_secs()),
                )
                .into());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, stderr = %stderr, "Ollama exited with failure");
            return Err(BackendError::new(
                PROVIDER,
                BackendErrorKind::NonZeroExit {
                    status: output.status.to_string(),
                    stderr,
                },
            )
            .into());
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(BackendError::new(PROVIDER, BackendErrorKind::EmptyOutput).into());
        }

        debug!(response_len = text.len(), "Received ollama output");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
