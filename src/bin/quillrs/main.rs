use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;

use quillrs::providers::api_key_from_env;
use quillrs::{
    AppConfig, BlogPostGenerator, BrandingConfig, FormState, GenerateError, ModelId,
    ProviderOverrides, classify_provider_error, create_provider_with_overrides, html, ui,
};

mod args;
mod form_prompt;
use args::{CliArgs, USAGE};

#[tokio::main]
async fn main() -> Result<()> {
    ui::init_logging();

    let args = CliArgs::parse()?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.list_presets {
        ui::persona_presets();
        return Ok(());
    }

    let _ = dotenvy::dotenv();
    if api_key_from_env().is_none() {
        log::warn!("Gemini API key (API_KEY) is not set. API calls will fail.");
    }

    let config = AppConfig::load()?;
    let branding = BrandingConfig::load(Path::new(&config.paths.branding))?;
    let mut form = config.initial_form()?;
    args.apply_to(&mut form)?;

    let overrides = ProviderOverrides {
        model: args.model.clone().map(ModelId::new),
    };
    let generator = match create_provider_with_overrides(overrides).await {
        Ok(provider) => BlogPostGenerator::new(provider),
        Err(e) => {
            log::error!("Failed to set up provider: {e}");
            report_error(&args, &classify_provider_error(e));
            std::process::exit(1);
        }
    };

    if args.is_scriptable() {
        if !args.quiet && !args.json_output {
            ui::header(
                &branding,
                generator.provider().name(),
                generator.provider().model().as_str(),
            );
        }
        if !run_once(&generator, &form, &args, &branding).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    interactive(&generator, &mut form, &args, &branding).await
}

async fn interactive(
    generator: &BlogPostGenerator,
    form: &mut FormState,
    args: &CliArgs,
    branding: &BrandingConfig,
) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    ui::header(
        branding,
        generator.provider().name(),
        generator.provider().model().as_str(),
    );
    ui::info("Press Enter to keep a value, Ctrl-D to quit.");

    loop {
        if !form_prompt::fill(&mut rl, form)? {
            break;
        }

        run_once(generator, form, args, branding).await?;

        match rl.readline("Generate another? [Y/n] ") {
            Ok(answer) if matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no" | "q") => {
                break;
            }
            Ok(_) => {}
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    ui::footer(branding);
    ui::goodbye();
    Ok(())
}

/// Generate one post and deliver it. Returns whether generation succeeded.
async fn run_once(
    generator: &BlogPostGenerator,
    form: &FormState,
    args: &CliArgs,
    branding: &BrandingConfig,
) -> Result<bool> {
    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            report_error(args, &GenerateError::from(e));
            return Ok(false);
        }
    };

    if !args.quiet && !args.json_output {
        ui::loading(branding);
    }

    match generator.generate(&request).await {
        Ok(post) => {
            deliver(&post, &request, args, branding)?;
            Ok(true)
        }
        Err(e) => {
            report_error(args, &e);
            Ok(false)
        }
    }
}

fn deliver(
    post: &str,
    request: &quillrs::BlogPostRequest,
    args: &CliArgs,
    branding: &BrandingConfig,
) -> Result<()> {
    if let Some(path) = &args.output {
        std::fs::write(path, format!("{post}\n"))
            .with_context(|| format!("Failed to write {path}"))?;
    }
    if let Some(path) = &args.html {
        std::fs::write(path, html::render_document(branding, post))
            .with_context(|| format!("Failed to write {path}"))?;
    }

    if args.json_output {
        let out = serde_json::json!({
            "request": request,
            "post": post,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if args.quiet {
        println!("{}", quillrs::sanitize::sanitize_for_console(post));
    } else {
        ui::post(post);
        if let Some(path) = &args.output {
            ui::info(format!("Saved text to {path}"));
        }
        if let Some(path) = &args.html {
            ui::info(format!("Saved HTML to {path}"));
        }
    }
    Ok(())
}

fn report_error(args: &CliArgs, err: &GenerateError) {
    if args.json_output {
        let out = serde_json::json!({
            "error": err.to_string(),
            "kind": err.kind(),
        });
        println!("{out}");
    } else {
        ui::error(err.to_string());
    }
}
