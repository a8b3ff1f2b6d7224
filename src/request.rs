use serde::{Deserialize, Serialize};

use crate::errors::RequestError;
use crate::types::{Audience, Style, Tone};

pub const MIN_POST_LENGTH: u32 = 50;
pub const DEFAULT_POST_LENGTH: u32 = 500;
/// Increment applied by `+`/`-` in the interactive length prompt.
pub const LENGTH_STEP: u32 = 50;

/// Flat record of everything a generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    pub tone: Tone,
    pub style: Style,
    /// Approximate word count.
    pub length: u32,
    pub audience: Audience,
}

impl BlogPostRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            persona: None,
            tone: Tone::default(),
            style: Style::default(),
            length: DEFAULT_POST_LENGTH,
            audience: Audience::default(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.topic.trim().is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        if self.length < MIN_POST_LENGTH {
            return Err(RequestError::LengthTooShort {
                min: MIN_POST_LENGTH,
                got: self.length,
            });
        }
        Ok(())
    }

    /// Persona text if it carries anything beyond whitespace.
    pub fn persona_text(&self) -> Option<&str> {
        self.persona
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

pub fn clamp_length(words: u32) -> u32 {
    words.max(MIN_POST_LENGTH)
}
