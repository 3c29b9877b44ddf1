//! Configuration for the story service, read once at startup.

use std::time::Duration;

use fabula_error::ConfigError;

/// The closed set of model backends.
///
/// Exactly one is active per deployment instance; switching is a
/// deployment-time decision resolved here and never re-read at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendKind {
    /// Local `ollama` CLI subprocess
    #[display("ollama")]
    Ollama,
    /// OpenAI chat completions API
    #[display("openai")]
    OpenAi,
    /// Google Gemini generateContent API
    #[display("gemini")]
    Gemini,
}

impl BackendKind {
    /// Parse a backend name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ollama" => Some(Self::Ollama),
            "openai" => Some(Self::OpenAi),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Active model backend
    pub backend: BackendKind,
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Model name for the ollama backend
    pub ollama_model: String,
    /// Model name for the OpenAI backend
    pub openai_model: String,
    /// Model name for the Gemini backend
    pub gemini_model: String,
    /// OpenAI API key, required when the OpenAI backend is active
    pub openai_api_key: Option<String>,
    /// Gemini API key, required when the Gemini backend is active
    pub gemini_api_key: Option<String>,
    /// Upper bound on a single backend call
    pub timeout: Duration,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// Reads:
    /// - `FABULA_BACKEND` — "ollama" (default), "openai", or "gemini"
    /// - `FABULA_HOST` (default "127.0.0.1") and `FABULA_PORT` (default 8000)
    /// - `OLLAMA_MODEL` (default "llama3"), `OPENAI_MODEL` (default
    ///   "gpt-4o-mini"), `GEMINI_MODEL` (default "gemini-2.0-flash")
    /// - `OPENAI_API_KEY` / `GEMINI_API_KEY` (validated when the matching
    ///   backend is built, not here)
    /// - `FABULA_TIMEOUT_SECS` (default 120)
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match std::env::var("FABULA_BACKEND") {
            Ok(name) => BackendKind::parse(&name).ok_or_else(|| {
                ConfigError::new(format!(
                    "FABULA_BACKEND must be one of ollama, openai, gemini; got {:?}",
                    name
                ))
            })?,
            Err(_) => BackendKind::Ollama,
        };

        let host = std::env::var("FABULA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("FABULA_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::new(format!("FABULA_PORT is not a port: {:?}", raw)))?,
            Err(_) => 8000,
        };

        let timeout_secs: u64 = match std::env::var("FABULA_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::new(format!("FABULA_TIMEOUT_SECS is not a number: {:?}", raw))
            })?,
            Err(_) => 120,
        };

        Ok(Self {
            backend,
            host,
            port,
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_names_case_insensitively() {
        assert_eq!(BackendKind::parse("ollama"), Some(BackendKind::Ollama));
        assert_eq!(BackendKind::parse("OpenAI"), Some(BackendKind::OpenAi));
        assert_eq!(BackendKind::parse("GEMINI"), Some(BackendKind::Gemini));
        assert_eq!(BackendKind::parse("claude"), None);
    }

    #[test]
    fn backend_kind_displays_its_config_name() {
        assert_eq!(BackendKind::OpenAi.to_string(), "openai");
    }
}
