use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fmt::Display;
use std::str::FromStr;

use quillrs::persona::{PERSONA_PRESETS, PersonaPreset, find_preset};
use quillrs::request::{LENGTH_STEP, MIN_POST_LENGTH};
use quillrs::{Audience, FormState, Style, Tone, ui};

/// Resolve a menu answer: a 1-based index or anything `FromStr` accepts.
pub fn pick<T: Copy + FromStr>(input: &str, all: &[T]) -> Option<T> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| all.get(i)).copied();
    }
    input.parse::<T>().ok()
}

pub fn pick_preset(input: &str) -> Option<&'static PersonaPreset> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| PERSONA_PRESETS.get(i));
    }
    find_preset(input)
}

/// Resolve a length answer: a word count, or `+`/`-` to step from `current`.
/// The caller clamps to the minimum.
pub fn parse_length(input: &str, current: u32) -> Option<u32> {
    match input.trim() {
        "+" => Some(current.saturating_add(LENGTH_STEP)),
        "-" => Some(current.saturating_sub(LENGTH_STEP)),
        other => other.parse().ok(),
    }
}

/// Ok(None) means the user asked to quit (Ctrl-C / Ctrl-D).
fn ask(rl: &mut DefaultEditor, prompt: &str, current: &str) -> Result<Option<String>> {
    match rl.readline_with_initial(prompt, (current, "")) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn choose<T: Copy + Display + FromStr>(
    rl: &mut DefaultEditor,
    title: &str,
    all: &[T],
    current: T,
) -> Result<Option<T>> {
    let labels: Vec<String> = all.iter().map(|t| t.to_string()).collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
    ui::options(title, &labels);

    loop {
        let Some(answer) = ask(rl, &format!("{title} > "), &current.to_string())? else {
            return Ok(None);
        };
        if answer.trim().is_empty() {
            return Ok(Some(current));
        }
        match pick(&answer, all) {
            Some(choice) => return Ok(Some(choice)),
            None => ui::warn(format!("Not an option: {}", answer.trim())),
        }
    }
}

/// Walk the user through every field, pre-filled with the current values.
/// Returns false if the user quit part way.
pub fn fill(rl: &mut DefaultEditor, form: &mut FormState) -> Result<bool> {
    loop {
        let Some(topic) = ask(rl, "Topic > ", &form.topic)? else {
            return Ok(false);
        };
        form.topic = topic.trim().to_string();
        if form.can_submit() {
            break;
        }
        ui::warn("Please enter a topic for your blog post.");
    }

    let labels: Vec<&str> = PERSONA_PRESETS.iter().map(|p| p.label).collect();
    ui::options("Persona preset", &labels);
    loop {
        let Some(answer) = ask(rl, "Persona preset > ", form.persona_preset())? else {
            return Ok(false);
        };
        match pick_preset(&answer) {
            Some(preset) => {
                // Re-selecting the custom entry keeps whatever text was typed before.
                if !(preset.is_custom() && preset.key == form.persona_preset()) {
                    form.select_persona_preset(preset.key)?;
                }
                break;
            }
            None => ui::warn(format!("Not a preset: {}", answer.trim())),
        }
    }

    if find_preset(form.persona_preset()).is_some_and(|p| p.is_custom()) {
        let Some(persona) = ask(rl, "Persona (optional) > ", &form.persona_text)? else {
            return Ok(false);
        };
        form.set_custom_persona(persona);
    } else {
        ui::field("Persona", form.persona_preset());
    }

    let Some(tone) = choose::<Tone>(rl, "Tone", Tone::ALL, form.tone)? else {
        return Ok(false);
    };
    form.tone = tone;

    let Some(style) = choose::<Style>(rl, "Style", Style::ALL, form.style)? else {
        return Ok(false);
    };
    form.style = style;

    let length_prompt =
        format!("Length in words (min {MIN_POST_LENGTH}, +/- steps by {LENGTH_STEP}) > ");
    loop {
        let Some(answer) = ask(rl, &length_prompt, &form.length().to_string())? else {
            return Ok(false);
        };
        match parse_length(&answer, form.length()) {
            Some(words) => {
                form.set_length(words);
                break;
            }
            None => ui::warn(format!("Not a number: {}", answer.trim())),
        }
    }

    let Some(audience) = choose::<Audience>(rl, "Audience", Audience::ALL, form.audience)? else {
        return Ok(false);
    };
    form.audience = audience;

    Ok(true)
}
