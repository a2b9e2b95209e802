//! Configuration for the completion backend.
//!
//! One explicit `Config` value is built per process from the environment
//! and handed to the client at construction time. A `.env` file in the
//! working directory is honoured when present.

use crate::error::CasegenError;

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default base URL of the OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for one completion backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion endpoint.
    pub api_key: String,

    /// Model identifier.
    pub model: String,

    /// Base URL of the OpenAI-compatible API, without a trailing path.
    pub base_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Priority for each knob:
    /// 1. Process environment
    /// 2. `.env` file in the working directory
    /// 3. Built-in default (`OPENAI_API_KEY` has none and is required)
    pub fn from_env() -> Result<Self, CasegenError> {
        // Absence of a .env file is not an error
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(CasegenError::Configuration(
                "OPENAI_API_KEY environment variable is not set".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            model: env_or("CASEGEN_MODEL", DEFAULT_MODEL),
            base_url: env_or("CASEGEN_BASE_URL", DEFAULT_BASE_URL),
        })
    }
}

/// Read an environment variable, falling back to a default when unset or blank.
fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation races between parallel tests, so the from_env
    // paths are exercised in one sequential test body.
    #[test]
    fn test_from_env_requires_api_key() {
        std::env::remove_var("OPENAI_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, CasegenError::Configuration(_)));

        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("CASEGEN_MODEL", "");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("CASEGEN_MODEL");
    }
}
