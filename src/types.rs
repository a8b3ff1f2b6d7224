use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RequestError;

/// Normalize a user-supplied choice so "General Public", "general-public"
/// and "GENERAL_PUBLIC" compare equal.
fn choice_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! labelled_choice {
    ($(#[$meta:meta])* $name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in form order. The first one is the form default.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = RequestError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = choice_key(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|opt| choice_key(opt.label()) == wanted)
                    .ok_or_else(|| RequestError::UnknownChoice {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_choice!(
    /// Voice register of the generated post.
    Tone, "tone", {
        Formal => "Formal",
        Casual => "Casual",
        Humorous => "Humorous",
        Serious => "Serious",
        Inspirational => "Inspirational",
        Assertive => "Assertive",
    }
);

labelled_choice!(
    /// Rhetorical style of the generated post.
    Style, "style", {
        Narrative => "Narrative",
        Descriptive => "Descriptive",
        Persuasive => "Persuasive",
        Informative => "Informative",
        Expository => "Expository",
        Review => "Review",
    }
);

labelled_choice!(
    /// Intended readership.
    Audience, "audience", {
        GeneralPublic => "General Public",
        TechnicalExperts => "Technical Experts",
        Beginners => "Beginners",
        Children => "Children",
        Teenagers => "Teenagers",
        Academics => "Academics",
    }
);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn gemini_flash() -> Self {
        Self::new("gemini-2.5-flash-preview-04-17")
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::gemini_flash()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
