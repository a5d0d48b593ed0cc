//! Non-interactive form run: every value comes from the command line and is
//! fed through the same step-by-step transitions as the wizard.

use anyhow::Result;
use colored::Colorize;

use fireup::config::Config;
use fireup::form::{FieldValues, FormController, Step, Transition};
use fireup::ui;

use super::{apply_input, deliver, print_errors, submission_handler};
use crate::cli::OutputArgs;

/// Walk the form with `values`, stopping at the first blocked step.
pub fn run_form(form: &mut FormController, config: &Config, values: &FieldValues) -> Result<()> {
    form.advance();

    loop {
        let step = form.step();
        for field in step.fields() {
            apply_input(form, config, *field, values.get(*field));
        }

        if step.is_final() {
            return Ok(());
        }

        match form.advance() {
            Transition::Moved { .. } => continue,
            Transition::Blocked { step, errors } => {
                eprintln!("{} Blocked at {}", "✗".red(), step);
                print_errors(&errors);
                anyhow::bail!("Form could not continue past {}", step);
            }
            other => anyhow::bail!("Unexpected transition from {}: {:?}", step, other),
        }
    }
}

pub fn cmd_fill(values: FieldValues, output: &OutputArgs) -> Result<()> {
    let config = super::load_config()?;
    let mut form = config.controller()?;

    run_form(&mut form, &config, &values)?;
    debug_assert_eq!(form.step(), Step::FINAL);

    let submission = match form.submit() {
        Ok(submission) => submission,
        Err(fireup::form::SubmitError::Invalid(errors)) => {
            eprintln!("{} Blocked at {}", "✗".red(), Step::FINAL);
            print_errors(&errors);
            anyhow::bail!("Form could not be submitted");
        }
        Err(e) => return Err(e.into()),
    };

    if !ui::is_quiet() {
        eprintln!(
            "{} {} {}",
            ui::step_track(form.state()),
            ui::colors::success("All steps valid"),
            ui::colors::secondary(&format!(
                "(living in {})",
                form.countries().display_name(&submission.residence)
            ))
        );
    }

    let mut handler = submission_handler(&config, output)?;
    deliver(handler.as_mut(), &submission)
}
