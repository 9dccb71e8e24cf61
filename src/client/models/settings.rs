//! Application settings models

use serde::{Deserialize, Serialize};

/// Server-side application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Active AI provider (claude, openai, gemini, ollama)
    pub ai_provider: String,

    /// Masked Claude API key, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claude_api_key: Option<String>,

    /// Masked OpenAI API key, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    /// Ollama endpoint URL
    #[serde(default)]
    pub ollama_endpoint: String,

    /// Default currency code (e.g. NOK)
    #[serde(default)]
    pub default_currency: String,

    /// Whether the first-run setup wizard has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

/// Partial settings update, unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateSettingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claude_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_completed: Option<bool>,
}

/// Body of `POST /settings/test-ai`
#[derive(Debug, Clone, Serialize)]
pub struct TestAiRequest<'a> {
    pub provider: &'a str,
    pub api_key: Option<&'a str>,
    pub endpoint: Option<&'a str>,
}

/// Outcome of an AI provider connection test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestAiResult {
    pub success: bool,
    pub message: String,
}
