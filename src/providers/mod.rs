use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub mod gemini;

use crate::config_file::{ProviderConfig, ProviderSettings};
use crate::errors::ProviderError;
use crate::types::ModelId;
use reqwest::Client;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Env vars checked for the Gemini credential, in order.
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

pub(crate) struct ProviderHttpClient {
    client: Client,
}

impl ProviderHttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Sampling knobs sent with every generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

impl SamplingParams {
    pub fn with_settings(self, settings: &ProviderSettings) -> Self {
        Self {
            temperature: settings.temperature.unwrap_or(self.temperature),
            top_p: settings.top_p.unwrap_or(self.top_p),
            top_k: settings.top_k.unwrap_or(self.top_k),
        }
    }
}

/// Request structure for LLM inference
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub model: ModelId,
    pub system: String,
    pub prompt: String,
    pub sampling: SamplingParams,
}

/// Response structure from LLM inference
#[derive(Debug, Clone, Default)]
pub struct InferenceResponse {
    /// Concatenated candidate text; `None` when the provider sent none.
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Usage,
}

/// Token usage information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Trait for LLM providers
#[async_trait::async_trait]
pub trait LLMProvider: Send + Sync {
    /// Run inference with the given request
    async fn infer(&self, req: &InferenceRequest) -> Result<InferenceResponse, ProviderError>;

    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &ModelId;

    /// Sampling parameters configured for this provider
    fn sampling(&self) -> SamplingParams {
        SamplingParams::default()
    }

    /// Validate that this provider is properly configured
    fn validate_config(&self) -> Result<(), ProviderError>;
}

#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    /// Model override (e.g. from CLI -m/--model)
    pub model: Option<ModelId>,
}

/// First non-blank credential from [`API_KEY_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Create the Gemini provider. Settings are resolved as:
/// 1. `.env` is loaded if present
/// 2. `.quillrs/provider.json` supplies model, timeout, sampling and base URL
/// 3. model precedence is override > MODEL env var > config file > default
/// 4. the credential comes from API_KEY, then GEMINI_API_KEY
pub async fn create_provider() -> Result<Box<dyn LLMProvider>, ProviderError> {
    create_provider_with_overrides(ProviderOverrides::default()).await
}

pub async fn create_provider_with_overrides(
    overrides: ProviderOverrides,
) -> Result<Box<dyn LLMProvider>, ProviderError> {
    let _ = dotenvy::dotenv();

    let config_file = match ProviderConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring provider config: {e}");
            ProviderConfig::default()
        }
    };
    let settings = config_file.merged_settings("gemini");

    let key = api_key_from_env().ok_or_else(|| ProviderError::MissingApiKey("gemini".to_string()))?;

    let model = overrides
        .model
        .or(env::var("MODEL").ok().map(ModelId::new))
        .or(settings.model.clone().map(ModelId::new));

    let provider = gemini::GeminiProvider::from_settings(key, model, &settings)?;
    provider.validate_config()?;
    log::debug!(
        "using provider {} with model {}",
        provider.name(),
        provider.model()
    );
    Ok(Box::new(provider))
}
