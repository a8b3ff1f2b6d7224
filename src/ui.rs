use colored::*;

use crate::branding::BrandingConfig;
use crate::persona::PERSONA_PRESETS;
use crate::sanitize;

/// Environment variable that enables machine-readable JSON logs when set to "1" or "true".
const MACHINE_LOG_ENV: &str = "QUILLRS_MACHINE_LOG";

pub fn init_logging() {
    // Internal logs are opt-in via RUST_LOG; UI output stays on stdout.
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(log::LevelFilter::Warn);
    }
    let _ = builder.try_init();
}

fn machine_log_enabled() -> bool {
    matches!(
        std::env::var(MACHINE_LOG_ENV)
            .ok()
            .as_deref()
            .map(str::to_ascii_lowercase)
            .as_deref(),
        Some("1") | Some("true")
    )
}

fn emit_machine_event(kind: &str, data: serde_json::Value) {
    if !machine_log_enabled() {
        return;
    }

    let event = serde_json::json!({
        "kind": kind,
        "data": data,
    });

    if let Ok(line) = serde_json::to_string(&event) {
        eprintln!("{line}");
    }
}

pub fn info(msg: impl AsRef<str>) {
    let raw = msg.as_ref();
    println!("{}", sanitize::sanitize_for_console(raw).dimmed());
    emit_machine_event("info", serde_json::json!({ "message": raw }));
}

pub fn warn(msg: impl AsRef<str>) {
    let raw = msg.as_ref();
    eprintln!("{} {}", "!".yellow().bold(), sanitize::sanitize_for_console(raw).yellow());
    emit_machine_event("warn", serde_json::json!({ "message": raw }));
}

pub fn error(msg: impl AsRef<str>) {
    let raw = msg.as_ref();
    eprintln!("\n{} {}", "✗".red().bold(), sanitize::sanitize_for_console(raw).red());
    emit_machine_event("error", serde_json::json!({ "message": raw }));
}

pub fn header(branding: &BrandingConfig, provider: &str, model: &str) {
    let title = sanitize::sanitize_for_console(&branding.ui.header.title);
    let subtitle = sanitize::sanitize_for_console(&branding.ui.header.subtitle);

    println!(
        "{} {} | {}",
        ">>".bold(),
        title.bold(),
        format!("{provider}/{model}").cyan()
    );
    println!("{}", subtitle.dimmed());
    emit_machine_event(
        "header",
        serde_json::json!({
            "title": branding.ui.header.title,
            "provider": provider,
            "model": model,
        }),
    );
}

pub fn loading(branding: &BrandingConfig) {
    let msg = sanitize::sanitize_for_console(&branding.ui.loading.message);
    println!("\n{} {}", "●".blue().bold(), msg.blue());
    emit_machine_event("loading", serde_json::json!({}));
}

pub fn post(text: &str) {
    let safe = sanitize::sanitize_for_console(text);
    println!("\n{}\n", "─".repeat(60).dimmed());
    for line in safe.lines() {
        if line.starts_with('#') {
            println!("{}", line.bold().cyan());
        } else {
            println!("{line}");
        }
    }
    println!("\n{}", "─".repeat(60).dimmed());
    emit_machine_event(
        "post",
        serde_json::json!({ "chars": text.chars().count() }),
    );
}

pub fn footer(branding: &BrandingConfig) {
    println!("{}", sanitize::sanitize_for_console(&branding.ui.footer.text).dimmed());
}

pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label}:").cyan(), value.dimmed());
}

pub fn options(title: &str, labels: &[&str]) {
    println!("{}", title.bold());
    for (i, label) in labels.iter().enumerate() {
        println!("  {} {label}", format!("{:>2})", i + 1).dimmed());
    }
}

pub fn persona_presets() {
    println!("{}", "Persona presets".bold());
    for preset in PERSONA_PRESETS {
        println!("  {} {}", preset.key.cyan(), preset.label.dimmed());
    }
}

pub fn goodbye() {
    println!("\n{}", "Goodbye!".dimmed());
    emit_machine_event("goodbye", serde_json::json!({}));
}
