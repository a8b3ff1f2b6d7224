pub mod app_config;
pub mod branding;
mod config_file;
pub mod errors;
pub mod form;
pub mod generator;
pub mod html;
pub mod persona;
pub mod prompt;
pub mod providers;
pub mod request;
pub mod sanitize;
pub mod types;
pub mod ui;

pub use crate::app_config::AppConfig;
pub use crate::branding::BrandingConfig;
pub use crate::config_file::{ProviderConfig, ProviderSettings};
pub use crate::errors::{ConfigError, GenerateError, ProviderError, RequestError};
pub use crate::form::FormState;
pub use crate::generator::{
    BlogPostGenerator, classify_provider_error, generate_blog_post,
    generate_blog_post_with_overrides, generate_content,
};
pub use crate::prompt::{PromptParts, build_prompt};
pub use crate::providers::{
    InferenceRequest, InferenceResponse, LLMProvider, ProviderOverrides, SamplingParams, Usage,
    create_provider, create_provider_with_overrides,
};
pub use crate::request::BlogPostRequest;
pub use crate::types::{Audience, ModelId, Style, Tone};
