//! Command module structure for fireup CLI

use anyhow::Result;
use colored::Colorize;

use fireup::config::{Config, OutputFormat};
use fireup::form::{Field, FieldValidationError, FormController};
use fireup::submission::{
    ConsoleHandler, Delivery, JsonFileHandler, JsonHandler, Submission, SubmissionHandler,
};
use fireup::templates::Templates;

use crate::cli::OutputArgs;

pub mod check;
pub mod countries;
pub mod fill;
pub mod info;
pub mod subscribe;
pub mod util;

/// Load the merged global + project configuration.
pub fn load_config() -> Result<Config> {
    Config::load()
}

/// Pick the submission handler from command-line flags, falling back to config.
pub fn submission_handler(config: &Config, args: &OutputArgs) -> Result<Box<dyn SubmissionHandler>> {
    if let Some(dir) = args.output.clone().or_else(|| config.output_dir()) {
        return Ok(Box::new(JsonFileHandler::new(dir)));
    }

    match args.format.unwrap_or(config.submission.format) {
        OutputFormat::Json => Ok(Box::new(JsonHandler::new(std::io::stdout()))),
        OutputFormat::Text => {
            let templates = Templates::new(config.template_path().as_deref())?;
            Ok(Box::new(ConsoleHandler::stdout(templates)))
        }
    }
}

/// Hand the submission off and report where it went.
pub fn deliver(handler: &mut dyn SubmissionHandler, submission: &Submission) -> Result<()> {
    match handler.deliver(submission)? {
        Delivery::Printed => {}
        Delivery::Written(path) => {
            if !fireup::ui::is_quiet() {
                println!(
                    "{} Form Submitted! Saved to {}",
                    "✓".green(),
                    path.display().to_string().cyan()
                );
            }
        }
    }
    Ok(())
}

/// Print validation errors, one per line, next to their field names.
pub fn print_errors(errors: &[FieldValidationError]) {
    for error in errors {
        eprintln!(
            "  {} {}: {}",
            "✗".red(),
            fireup::ui::colors::identifier(error.field.as_str()),
            error.message.red()
        );
    }
}

/// Phone entries without an international prefix get the default country's
/// dial code, as the phone picker does.
pub fn normalize_phone(form: &FormController, default_country: &str, value: &str) -> String {
    let dial = form
        .countries()
        .get(default_country)
        .and_then(|c| c.dial.as_deref());
    match dial {
        Some(dial) => fireup::phone::with_dial_code(value, dial),
        None => value.trim().to_string(),
    }
}

/// Apply a raw input to the form the way its widget would.
pub fn apply_input(form: &mut FormController, config: &Config, field: Field, value: &str) {
    if field.is_country() {
        form.select(field, Some(value));
    } else if field == Field::Phone {
        let phone = normalize_phone(form, &config.form.default_country, value);
        form.set_field(field, phone);
    } else {
        form.set_field(field, value);
    }
}
