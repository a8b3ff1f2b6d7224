use crate::errors::RequestError;
use crate::persona::{CUSTOM_PERSONA_KEY, find_preset};
use crate::request::{BlogPostRequest, DEFAULT_POST_LENGTH, clamp_length};
use crate::types::{Audience, Style, Tone};

/// In-memory state of the generation form. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub topic: String,
    persona_preset: &'static str,
    pub persona_text: String,
    pub tone: Tone,
    pub style: Style,
    length: u32,
    pub audience: Audience,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            persona_preset: CUSTOM_PERSONA_KEY,
            persona_text: String::new(),
            tone: Tone::default(),
            style: Style::default(),
            length: DEFAULT_POST_LENGTH,
            audience: Audience::default(),
        }
    }
}

impl FormState {
    pub fn persona_preset(&self) -> &'static str {
        self.persona_preset
    }

    /// A preset fills the persona text; the custom entry clears it.
    pub fn select_persona_preset(&mut self, key: &str) -> Result<(), RequestError> {
        let preset = find_preset(key).ok_or_else(|| RequestError::UnknownPreset(key.to_string()))?;
        self.persona_preset = preset.key;
        if preset.is_custom() {
            self.persona_text.clear();
        } else {
            self.persona_text = preset.value.to_string();
        }
        Ok(())
    }

    /// Persona text is only editable while the custom preset is selected.
    pub fn set_custom_persona(&mut self, text: impl Into<String>) {
        self.persona_preset = CUSTOM_PERSONA_KEY;
        self.persona_text = text.into();
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn set_length(&mut self, words: u32) {
        self.length = clamp_length(words);
    }

    pub fn can_submit(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    pub fn to_request(&self) -> Result<BlogPostRequest, RequestError> {
        if !self.can_submit() {
            return Err(RequestError::EmptyTopic);
        }
        let persona = self.persona_text.trim();
        Ok(BlogPostRequest {
            topic: self.topic.clone(),
            persona: (!persona.is_empty()).then(|| persona.to_string()),
            tone: self.tone,
            style: self.style,
            length: self.length,
            audience: self.audience,
        })
    }
}
