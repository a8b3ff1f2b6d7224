use serde_json::{Value, json};

use crate::config_file::ProviderSettings;
use crate::errors::ProviderError;

use super::{
    DEFAULT_TIMEOUT_SECS, InferenceRequest, InferenceResponse, LLMProvider, ProviderHttpClient,
    SamplingParams, Usage,
};
use crate::types::ModelId;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

pub struct GeminiProvider {
    http: ProviderHttpClient,
    key: String,
    model: ModelId,
    base_url: String,
    sampling: SamplingParams,
}

impl GeminiProvider {
    pub fn new_with_model(key: String, model: Option<ModelId>) -> Result<Self, ProviderError> {
        Self::from_settings(key, model, &ProviderSettings::default())
    }

    pub fn from_settings(
        key: String,
        model: Option<ModelId>,
        settings: &ProviderSettings,
    ) -> Result<Self, ProviderError> {
        let http = ProviderHttpClient::new(settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))?;
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| settings.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            key,
            model: model.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            sampling: SamplingParams::default().with_settings(settings),
        })
    }

    pub fn endpoint(&self, model: &ModelId) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

pub fn request_body(req: &InferenceRequest) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": req.system }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": req.prompt }]
        }],
        "generationConfig": {
            "temperature": req.sampling.temperature,
            "topP": req.sampling.top_p,
            "topK": req.sampling.top_k,
        }
    })
}

/// Pull `error.message` out of an error body, falling back to the raw text.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

pub fn parse_response(response_json: &Value) -> InferenceResponse {
    let candidate = response_json.pointer("/candidates/0");

    // Mirrors the SDK's `response.text`: all text parts of the first candidate.
    let text = candidate
        .and_then(|c| c.pointer("/content/parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                .collect::<String>()
        })
        .filter(|t| !t.is_empty());

    let finish_reason = candidate
        .and_then(|c| c.get("finishReason"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let usage = response_json
        .get("usageMetadata")
        .map(|u| Usage {
            input_tokens: u
                .get("promptTokenCount")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32,
            output_tokens: u
                .get("candidatesTokenCount")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32,
        })
        .unwrap_or_default();

    InferenceResponse {
        text,
        finish_reason,
        usage,
    }
}

#[async_trait::async_trait]
impl LLMProvider for GeminiProvider {
    async fn infer(&self, req: &InferenceRequest) -> Result<InferenceResponse, ProviderError> {
        let res = self
            .http
            .client()
            .post(self.endpoint(&req.model))
            .header("x-goog-api-key", &self.key)
            .json(&request_body(req))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await?;
            return Err(ProviderError::Api {
                provider: "Gemini",
                status: status.as_u16(),
                message: api_error_message(&err_text),
            });
        }

        let response_json: Value = res
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let parsed = parse_response(&response_json);
        log::debug!(
            "gemini finished ({:?}), {} input / {} output tokens",
            parsed.finish_reason,
            parsed.usage.input_tokens,
            parsed.usage.output_tokens
        );
        Ok(parsed)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &ModelId {
        &self.model
    }

    fn sampling(&self) -> SamplingParams {
        self.sampling
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        if self.key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey("gemini".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(ProviderError::Config("Gemini base URL is empty".to_string()));
        }
        Ok(())
    }
}
