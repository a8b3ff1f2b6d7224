use std::sync::{Arc, Mutex};

use quillrs::{
    Audience, BlogPostGenerator, BlogPostRequest, GenerateError, InferenceRequest,
    InferenceResponse, LLMProvider, ModelId, ProviderError, RequestError, SamplingParams, Style,
    Tone,
};

enum Outcome {
    Text(Option<&'static str>),
    ApiError(u16, &'static str),
    Invalid(&'static str),
}

/// Provider double that records every request and replays a fixed outcome.
struct ScriptedProvider {
    outcome: Outcome,
    model: ModelId,
    seen: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl ScriptedProvider {
    fn boxed(outcome: Outcome) -> (Box<dyn LLMProvider>, Arc<Mutex<Vec<InferenceRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let provider = Self {
            outcome,
            model: ModelId::gemini_flash(),
            seen: Arc::clone(&seen),
        };
        (Box::new(provider), seen)
    }
}

#[async_trait::async_trait]
impl LLMProvider for ScriptedProvider {
    async fn infer(&self, req: &InferenceRequest) -> Result<InferenceResponse, ProviderError> {
        self.seen.lock().unwrap().push(req.clone());
        match &self.outcome {
            Outcome::Text(text) => Ok(InferenceResponse {
                text: text.map(str::to_string),
                finish_reason: Some("STOP".to_string()),
                ..Default::default()
            }),
            Outcome::ApiError(status, message) => Err(ProviderError::Api {
                provider: "Gemini",
                status: *status,
                message: message.to_string(),
            }),
            Outcome::Invalid(message) => Err(ProviderError::InvalidResponse(message.to_string())),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &ModelId {
        &self.model
    }

    fn validate_config(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

fn future_of_ai() -> BlogPostRequest {
    BlogPostRequest {
        topic: "The Future of AI".to_string(),
        persona: Some("Tech enthusiast and futurist".to_string()),
        tone: Tone::Inspirational,
        style: Style::Informative,
        length: 500,
        audience: Audience::GeneralPublic,
    }
}

#[tokio::test]
async fn success_returns_trimmed_text() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::Text(Some(
        "\n  This is a generated blog post about the future of AI...  \n",
    )));
    let post = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap();
    assert_eq!(post, "This is a generated blog post about the future of AI...");
}

#[tokio::test]
async fn request_carries_prompt_model_and_sampling() {
    let (provider, seen) = ScriptedProvider::boxed(Outcome::Text(Some("ok")));
    BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let req = &seen[0];
    assert_eq!(req.model.as_str(), "gemini-2.5-flash-preview-04-17");
    assert!(req.prompt.contains("Topic: \"The Future of AI\""));
    assert!(req.system.contains("You are an expert blog post writer"));
    assert!(req.system.contains("Tech enthusiast and futurist"));
    assert_eq!(req.sampling, SamplingParams::default());
}

#[tokio::test]
async fn request_without_persona_omits_persona_line() {
    let (provider, seen) = ScriptedProvider::boxed(Outcome::Text(Some("ok")));
    let mut request = future_of_ai();
    request.persona = None;
    BlogPostGenerator::new(provider).generate(&request).await.unwrap();

    let seen = seen.lock().unwrap();
    assert!(!seen[0].system.contains("Embody the following persona"));
}

#[tokio::test]
async fn missing_text_is_empty_response() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::Text(None));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
    assert_eq!(
        err.to_string(),
        "Received an empty response from the AI. Please try again or adjust your prompt."
    );
}

#[tokio::test]
async fn whitespace_text_trims_to_empty_post() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::Text(Some("   \n")));
    let post = BlogPostGenerator::new(provider)
        .generate(&BlogPostRequest::new("Rust"))
        .await
        .unwrap();
    assert_eq!(post, "");
}

#[tokio::test]
async fn empty_string_text_is_empty_response() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::Text(Some("")));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
}

#[tokio::test]
async fn invalid_key_is_authentication_error() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::ApiError(
        400,
        "API key not valid. Please pass a valid API key.",
    ));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Authentication));
    assert_eq!(
        err.to_string(),
        "The Gemini API key is invalid. Please check your configuration."
    );
}

#[tokio::test]
async fn quota_is_quota_exceeded_error() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::ApiError(
        429,
        "You exceeded your current quota, please check your plan and billing details.",
    ));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::QuotaExceeded));
}

#[tokio::test]
async fn other_failures_are_generic_provider_errors() {
    let (provider, _) = ScriptedProvider::boxed(Outcome::ApiError(503, "The model is overloaded."));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Provider(ProviderError::Api { status: 503, .. })));
    assert!(err.to_string().starts_with("Failed to generate blog post."));

    let (provider, _) = ScriptedProvider::boxed(Outcome::Invalid("truncated body"));
    let err = BlogPostGenerator::new(provider)
        .generate(&future_of_ai())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Provider(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn invalid_request_never_reaches_provider() {
    let (provider, seen) = ScriptedProvider::boxed(Outcome::Text(Some("unused")));
    let generator = BlogPostGenerator::new(provider);

    let mut request = future_of_ai();
    request.length = 10;
    let err = generator.generate(&request).await.unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidRequest(RequestError::LengthTooShort { min: 50, got: 10 })
    ));

    let err = generator
        .generate(&BlogPostRequest::new("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidRequest(RequestError::EmptyTopic)));

    assert!(seen.lock().unwrap().is_empty());
}
