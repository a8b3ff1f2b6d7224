use thiserror::Error;

/// Failures talking to a provider, before any user-facing classification.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No API key found for {0}")]
    MissingApiKey(String),

    #[error("Provider configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Rejections of a blog post request before it reaches a provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Please enter a topic for your blog post.")]
    EmptyTopic,

    #[error("Post length must be at least {min} words (got {got})")]
    LengthTooShort { min: u32, got: u32 },

    #[error("Unknown {field}: {value}")]
    UnknownChoice { field: &'static str, value: String },

    #[error("Unknown persona preset: {0}")]
    UnknownPreset(String),
}

/// User-facing outcome of a failed generation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("API Key for Gemini is not configured. Please set the API_KEY environment variable.")]
    Configuration,

    #[error("The Gemini API key is invalid. Please check your configuration.")]
    Authentication,

    #[error("You have exceeded your Gemini API quota. Please check your usage or upgrade your plan.")]
    QuotaExceeded,

    #[error("Received an empty response from the AI. Please try again or adjust your prompt.")]
    EmptyResponse,

    #[error(
        "Failed to generate blog post. The AI service might be temporarily unavailable or the request could not be processed. Check logs for more details."
    )]
    Provider(#[source] ProviderError),

    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
}

impl GenerateError {
    /// Stable identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::Configuration => "configuration",
            GenerateError::Authentication => "authentication",
            GenerateError::QuotaExceeded => "quota_exceeded",
            GenerateError::EmptyResponse => "empty_response",
            GenerateError::Provider(_) => "provider",
            GenerateError::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Failures loading `.quillrs` config or branding files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
