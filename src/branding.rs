use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

/// White-label text and metadata shown around generated posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    pub app: AppBranding,
    pub metadata: Metadata,
    pub ui: UiText,
    #[serde(default)]
    pub icon: IconBranding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBranding {
    pub name: String,
    pub tagline: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub theme_color: String,
    pub favicon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiText {
    pub header: HeaderText,
    pub footer: FooterText,
    pub loading: LoadingText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderText {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingText {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconBranding {
    pub component: String,
    pub class_name: String,
}

impl Default for IconBranding {
    fn default() -> Self {
        Self {
            component: "FeatherIcon".to_string(),
            class_name: "icon".to_string(),
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        let name = "quillrs".to_string();
        let tagline = "AI Blog Post Generator".to_string();
        let description =
            "Generate blog posts with a chosen persona, tone, style, length and audience."
                .to_string();
        Self {
            metadata: Metadata {
                title: format!("{name} - {tagline}"),
                description: description.clone(),
                keywords: "blog, ai, writing, gemini".to_string(),
                author: name.clone(),
                og_title: format!("{name} - {tagline}"),
                og_description: description.clone(),
                og_image: "/og-image.png".to_string(),
                twitter_card: "summary_large_image".to_string(),
                theme_color: "#0ea5e9".to_string(),
                favicon: "/favicon.ico".to_string(),
            },
            ui: UiText {
                header: HeaderText {
                    title: name.clone(),
                    subtitle: "Craft engaging blog posts with AI".to_string(),
                },
                footer: FooterText {
                    text: "Powered by Gemini".to_string(),
                },
                loading: LoadingText {
                    message: "Generating your blog post...".to_string(),
                },
            },
            icon: IconBranding::default(),
            app: AppBranding {
                name,
                tagline,
                description,
            },
        }
    }
}

impl BrandingConfig {
    /// Missing file falls back to the built-in branding; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no branding file at {}, using defaults", path.display());
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
}
