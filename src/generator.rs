use crate::errors::{GenerateError, ProviderError};
use crate::prompt::build_prompt;
use crate::providers::{InferenceRequest, LLMProvider, ProviderOverrides};
use crate::request::BlogPostRequest;
use crate::types::{Audience, Style, Tone};

const INVALID_KEY_MARKER: &str = "API key not valid";
const QUOTA_MARKER: &str = "quota";

/// Re-label a provider failure as one of the user-facing error kinds.
pub fn classify_provider_error(err: ProviderError) -> GenerateError {
    if let ProviderError::MissingApiKey(_) = err {
        return GenerateError::Configuration;
    }

    let text = err.to_string();
    if text.contains(INVALID_KEY_MARKER) {
        GenerateError::Authentication
    } else if text.contains(QUOTA_MARKER) {
        GenerateError::QuotaExceeded
    } else {
        GenerateError::Provider(err)
    }
}

/// Runs one blog post request against a provider.
pub struct BlogPostGenerator {
    provider: Box<dyn LLMProvider>,
}

impl BlogPostGenerator {
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.provider.as_ref()
    }

    pub async fn generate(&self, request: &BlogPostRequest) -> Result<String, GenerateError> {
        request.validate()?;

        let prompt = build_prompt(request);
        let inference = InferenceRequest {
            model: self.provider.model().clone(),
            system: prompt.system_instruction,
            prompt: prompt.user_prompt,
            sampling: self.provider.sampling(),
        };

        log::debug!(
            "generating ~{} words on {:?} with {}/{}",
            request.length,
            request.topic,
            self.provider.name(),
            self.provider.model()
        );

        let response = self.provider.infer(&inference).await.map_err(|e| {
            log::error!("Error generating blog post with {}: {e}", self.provider.name());
            classify_provider_error(e)
        })?;

        let Some(text) = response.text.filter(|t| !t.is_empty()) else {
            log::warn!(
                "provider returned no text (finish reason: {:?})",
                response.finish_reason
            );
            return Err(GenerateError::EmptyResponse);
        };
        Ok(text.trim().to_string())
    }
}

/// Build the configured provider and generate one post.
pub async fn generate_blog_post(request: &BlogPostRequest) -> Result<String, GenerateError> {
    generate_blog_post_with_overrides(request, ProviderOverrides::default()).await
}

pub async fn generate_blog_post_with_overrides(
    request: &BlogPostRequest,
    overrides: ProviderOverrides,
) -> Result<String, GenerateError> {
    let provider = crate::providers::create_provider_with_overrides(overrides)
        .await
        .map_err(|e| {
            log::error!("Failed to set up provider: {e}");
            classify_provider_error(e)
        })?;
    BlogPostGenerator::new(provider).generate(request).await
}

/// Field-by-field form of [`generate_blog_post`].
pub async fn generate_content(
    topic: &str,
    persona: Option<&str>,
    tone: Tone,
    style: Style,
    length_words: u32,
    audience: Audience,
) -> Result<String, GenerateError> {
    let request = BlogPostRequest {
        topic: topic.to_string(),
        persona: persona.map(str::to_string),
        tone,
        style,
        length: length_words,
        audience,
    };
    generate_blog_post(&request).await
}
