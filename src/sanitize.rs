use regex::Regex;
use std::sync::OnceLock;

const ALLOW_RAW_OUTPUT_ENV: &str = "QUILLRS_ALLOW_RAW_OUTPUT";

pub fn allow_raw_output() -> bool {
    std::env::var(ALLOW_RAW_OUTPUT_ENV)
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Drop ANSI CSI sequences (ESC [ ... final byte) so model output cannot
/// repaint the terminal.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for b in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&b) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}

pub fn sanitize_for_console(input: &str) -> String {
    if allow_raw_output() {
        return input.to_string();
    }
    redact(&strip_ansi(input))
}

fn redact(input: &str) -> String {
    static GOOGLE_KEY_RE: OnceLock<Regex> = OnceLock::new();
    static URL_KEY_RE: OnceLock<Regex> = OnceLock::new();

    let google_key_re = GOOGLE_KEY_RE
        .get_or_init(|| Regex::new(r"\bAIza[0-9A-Za-z_\-]{20,}").expect("google key regex"));
    let url_key_re = URL_KEY_RE.get_or_init(|| {
        Regex::new(r"([?&](?:key|api_key)=)[^&\s]+").expect("url key regex")
    });

    let s = url_key_re.replace_all(input, "$1[REDACTED]");
    google_key_re.replace_all(&s, "AIza[REDACTED]").into_owned()
}
