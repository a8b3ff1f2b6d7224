use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

pub const PROVIDER_CONFIG_PATH: &str = ".quillrs/provider.json";

/// Per-provider configuration settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Model name/ID (overridden by MODEL env var and -m)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// API timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Endpoint root, e.g. a proxy in front of the Generative Language API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Provider configuration file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Gemini-specific settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<ProviderSettings>,

    /// Default settings applied to all providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<ProviderSettings>,
}

impl ProviderConfig {
    /// Load config from `.quillrs/provider.json`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(PROVIDER_CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn get_provider_settings(&self, provider_name: &str) -> Option<&ProviderSettings> {
        match provider_name {
            "gemini" | "google" => self.gemini.as_ref(),
            _ => None,
        }
    }

    /// Merge provider-specific settings with defaults
    pub fn merged_settings(&self, provider_name: &str) -> ProviderSettings {
        let mut merged = self.defaults.clone().unwrap_or_default();

        if let Some(settings) = self.get_provider_settings(provider_name) {
            if settings.model.is_some() {
                merged.model = settings.model.clone();
            }
            if settings.timeout_secs.is_some() {
                merged.timeout_secs = settings.timeout_secs;
            }
            if settings.temperature.is_some() {
                merged.temperature = settings.temperature;
            }
            if settings.top_p.is_some() {
                merged.top_p = settings.top_p;
            }
            if settings.top_k.is_some() {
                merged.top_k = settings.top_k;
            }
            if settings.base_url.is_some() {
                merged.base_url = settings.base_url.clone();
            }
        }

        merged
    }
}
