use anyhow::{Context, Result, anyhow};
use std::env;

use quillrs::{Audience, FormState, Style, Tone};

pub const USAGE: &str = "\
Usage: quillrs [OPTIONS]

Without --topic, quillrs opens an interactive form.

Options:
  -t, --topic TEXT      Blog post topic (enables scriptable mode)
  -p, --persona TEXT    Custom persona description
      --preset KEY      Persona preset (see --list-presets)
      --tone TONE       Formal, Casual, Humorous, Serious, Inspirational, Assertive
      --style STYLE     Narrative, Descriptive, Persuasive, Informative, Expository, Review
  -a, --audience AUD    General Public, Technical Experts, Beginners, Children, Teenagers, Academics
  -l, --length WORDS    Approximate length in words (minimum 50)
  -m, --model MODEL     Gemini model override
  -o, --output FILE     Also write the post text to FILE
      --html FILE       Also write a branded HTML page to FILE
      --json            Print a JSON object instead of formatted text
  -q, --quiet           Print only the post
      --list-presets    List persona presets and exit
  -h, --help            Show this help";

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub topic: Option<String>,    // -t/--topic
    pub persona: Option<String>,  // -p/--persona
    pub preset: Option<String>,   // --preset
    pub tone: Option<String>,     // --tone
    pub style: Option<String>,    // --style
    pub audience: Option<String>, // -a/--audience
    pub length: Option<u32>,      // -l/--length
    pub model: Option<String>,    // -m/--model
    pub output: Option<String>,   // -o/--output
    pub html: Option<String>,     // --html
    pub json_output: bool,        // --json
    pub quiet: bool,              // -q/--quiet
    pub list_presets: bool,       // --list-presets
    pub help: bool,               // -h/--help
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        Self::parse_from(&args[1..])
    }

    /// Parse from a slice of arguments (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self> {
        let mut result = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let mut value = || -> Result<String> {
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| anyhow!("{arg} requires a value"))
            };

            match arg.as_str() {
                "-t" | "--topic" => result.topic = Some(value()?),
                "-p" | "--persona" => result.persona = Some(value()?),
                "--preset" => result.preset = Some(value()?),
                "--tone" => result.tone = Some(value()?),
                "--style" => result.style = Some(value()?),
                "-a" | "--audience" => result.audience = Some(value()?),
                "-l" | "--length" => {
                    let raw = value()?;
                    let words = raw
                        .trim()
                        .parse::<u32>()
                        .with_context(|| format!("{arg} expects a whole number, got {raw:?}"))?;
                    result.length = Some(words);
                }
                "-m" | "--model" => result.model = Some(value()?),
                "-o" | "--output" => result.output = Some(value()?),
                "--html" => result.html = Some(value()?),
                "--json" => result.json_output = true,
                "-q" | "--quiet" => result.quiet = true,
                "--list-presets" => result.list_presets = true,
                "-h" | "--help" => result.help = true,
                unknown => return Err(anyhow!("Unknown argument: {unknown}")),
            }

            i += 1;
        }

        Ok(result)
    }

    /// Determine if running in scriptable (non-interactive) mode
    pub fn is_scriptable(&self) -> bool {
        self.topic.is_some()
    }

    /// Overlay flags on top of the configured form defaults. A preset is
    /// applied before --persona so an explicit persona wins.
    pub fn apply_to(&self, form: &mut FormState) -> Result<()> {
        if let Some(topic) = &self.topic {
            form.topic = topic.clone();
        }
        if let Some(preset) = &self.preset {
            form.select_persona_preset(preset)?;
        }
        if let Some(persona) = &self.persona {
            form.set_custom_persona(persona.clone());
        }
        if let Some(tone) = &self.tone {
            form.tone = tone.parse::<Tone>()?;
        }
        if let Some(style) = &self.style {
            form.style = style.parse::<Style>()?;
        }
        if let Some(audience) = &self.audience {
            form.audience = audience.parse::<Audience>()?;
        }
        if let Some(length) = self.length {
            form.set_length(length);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_no_args() {
        let parsed = CliArgs::parse_from(&args(&[])).unwrap();
        assert!(parsed.topic.is_none());
        assert!(parsed.model.is_none());
        assert!(!parsed.quiet);
        assert!(!parsed.json_output);
        assert!(!parsed.is_scriptable());
    }

    #[test]
    fn parse_topic_short_and_long() {
        let parsed = CliArgs::parse_from(&args(&["-t", "Rust async"])).unwrap();
        assert_eq!(parsed.topic.as_deref(), Some("Rust async"));
        assert!(parsed.is_scriptable());

        let parsed = CliArgs::parse_from(&args(&["--topic", "Tea"])).unwrap();
        assert_eq!(parsed.topic.as_deref(), Some("Tea"));
    }

    #[test]
    fn parse_combined_args() {
        let parsed = CliArgs::parse_from(&args(&[
            "-t",
            "Home brewing",
            "--tone",
            "casual",
            "--style",
            "review",
            "-a",
            "beginners",
            "-l",
            "800",
            "-m",
            "gemini-2.0-flash",
            "--html",
            "post.html",
            "-q",
            "--json",
        ]))
        .unwrap();

        assert_eq!(parsed.topic.as_deref(), Some("Home brewing"));
        assert_eq!(parsed.tone.as_deref(), Some("casual"));
        assert_eq!(parsed.length, Some(800));
        assert_eq!(parsed.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(parsed.html.as_deref(), Some("post.html"));
        assert!(parsed.quiet);
        assert!(parsed.json_output);
    }

    #[test]
    fn parse_flags() {
        let parsed = CliArgs::parse_from(&args(&["--list-presets", "-h"])).unwrap();
        assert!(parsed.list_presets);
        assert!(parsed.help);
    }

    #[test]
    fn parse_error_on_unknown_arg() {
        let result = CliArgs::parse_from(&args(&["--unknown"]));
        assert!(result.unwrap_err().to_string().contains("Unknown argument"));
    }

    #[test]
    fn parse_error_on_missing_value() {
        for flag in ["-t", "--preset", "-l", "-m", "--html"] {
            let err = CliArgs::parse_from(&args(&[flag])).unwrap_err();
            assert!(err.to_string().contains("requires a value"), "{flag}: {err}");
        }
    }

    #[test]
    fn parse_error_on_bad_length() {
        let err = CliArgs::parse_from(&args(&["-l", "lots"])).unwrap_err();
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn apply_overlays_form() {
        let parsed = CliArgs::parse_from(&args(&[
            "-t",
            "Space",
            "--tone",
            "Humorous",
            "-a",
            "technical-experts",
            "-l",
            "10",
        ]))
        .unwrap();
        let mut form = FormState::default();
        parsed.apply_to(&mut form).unwrap();
        assert_eq!(form.topic, "Space");
        assert_eq!(form.tone, Tone::Humorous);
        assert_eq!(form.style, Style::Narrative);
        assert_eq!(form.audience, Audience::TechnicalExperts);
        assert_eq!(form.length(), 50);
    }

    #[test]
    fn explicit_persona_beats_preset() {
        let parsed = CliArgs::parse_from(&args(&[
            "--preset",
            "TECH_GURU",
            "-p",
            "a sleepy cat",
        ]))
        .unwrap();
        let mut form = FormState::default();
        parsed.apply_to(&mut form).unwrap();
        assert_eq!(form.persona_text, "a sleepy cat");
    }

    #[test]
    fn apply_rejects_unknown_choices() {
        let parsed = CliArgs::parse_from(&args(&["--style", "haiku"])).unwrap();
        let mut form = FormState::default();
        let err = parsed.apply_to(&mut form).unwrap_err();
        assert!(err.to_string().contains("Unknown style"));
    }
}
