//! LLM client configuration.

use serde::{Deserialize, Serialize};

/// Where to reach the vision model.
///
/// Only reachability is configurable; the prompt and request timeout are
/// fixed by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Vision model used for text extraction
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gemma3:4b".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

impl LlmConfig {
    /// Apply overrides from the process environment.
    ///
    /// Supported env vars:
    /// - `OLLAMA_HOST`: Ollama host, with or without scheme
    /// - `LLM_ENDPOINT`: API endpoint (wins over `OLLAMA_HOST`)
    /// - `LLM_MODEL`: Model name
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = var("OLLAMA_HOST") {
            self.endpoint = normalize_endpoint(&host);
        }
        if let Some(endpoint) = var("LLM_ENDPOINT") {
            self.endpoint = normalize_endpoint(&endpoint);
        }
        if let Some(model) = var("LLM_MODEL") {
            self.model = model;
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = normalize_endpoint(endpoint);
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

/// Add a scheme when missing and drop trailing slashes.
fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "gemma3:4b");
    }

    #[test]
    fn test_env_overrides() {
        let config = LlmConfig::default().with_overrides_from(lookup(&[("LLM_MODEL", "llava:7b")]));
        assert_eq!(config.model, "llava:7b");
        assert_eq!(config.endpoint, "http://localhost:11434");
    }

    #[test]
    fn test_prompt_and_timeout_not_configurable() {
        let config = LlmConfig::default().with_overrides_from(lookup(&[
            ("LLM_PROMPT", "Transcribe."),
            ("LLM_TIMEOUT_SECS", "30"),
            ("LLM_TEMPERATURE", "0.9"),
        ]));
        assert_eq!(config, LlmConfig::default());
    }

    #[test]
    fn test_ollama_host_without_scheme() {
        let config =
            LlmConfig::default().with_overrides_from(lookup(&[("OLLAMA_HOST", "10.0.0.5:11434")]));
        assert_eq!(config.endpoint, "http://10.0.0.5:11434");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = LlmConfig::default().with_overrides_from(lookup(&[
            ("OLLAMA_HOST", "10.0.0.5:11434"),
            ("LLM_ENDPOINT", "https://ollama.internal/"),
        ]));
        assert_eq!(config.endpoint, "https://ollama.internal");
    }
}
