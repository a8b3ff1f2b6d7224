use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{ConfigError, RequestError};
use crate::form::FormState;
use crate::persona::CUSTOM_PERSONA_KEY;
use crate::request::DEFAULT_POST_LENGTH;
use crate::types::{Audience, Style, Tone};

pub const APP_CONFIG_PATH: &str = ".quillrs/config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub form: FormDefaultsConfig,
    pub paths: PathsConfig,
}

impl AppConfig {
    /// Load from user-owned `.quillrs/config.json`; absent file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(APP_CONFIG_PATH))
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

    /// Initial form state seeded from the configured defaults.
    pub fn initial_form(&self) -> Result<FormState, RequestError> {
        let mut form = FormState::default();
        form.tone = self.form.tone;
        form.style = self.form.style;
        form.audience = self.form.audience;
        form.set_length(self.form.length);
        form.select_persona_preset(&self.form.persona_preset)?;
        Ok(form)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaultsConfig {
    pub tone: Tone,
    pub style: Style,
    pub audience: Audience,
    pub length: u32,
    pub persona_preset: String,
}

impl Default for FormDefaultsConfig {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            style: Style::default(),
            audience: Audience::default(),
            length: DEFAULT_POST_LENGTH,
            persona_preset: CUSTOM_PERSONA_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub branding: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            branding: "branding.json".to_string(),
        }
    }
}
