//! Interactive subscription wizard.
//!
//! Each screen collects the inputs its layout shows, then turns the user's
//! choice into a [`FormEvent`] for the controller. The controller decides
//! whether the step can be left.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use fireup::config::Config;
use fireup::form::{
    EventOutcome, Field, FormController, FormEvent, Step, SubmitError, Transition, TOTAL_STEPS,
};
use fireup::layout::Layout;
use fireup::ui;

use super::{apply_input, deliver, print_errors, submission_handler};
use crate::cli::OutputArgs;

const BACK: &str = "<";
const BACK_ITEM: &str = "< Back";

/// What the user typed for one input.
enum Answer {
    Value(String),
    Back,
}

/// Set up SIGINT handler: an interrupted session is discarded.
fn setup_signal_handler() {
    let _ = ctrlc::set_handler(move || {
        eprintln!(
            "\n{} Subscription abandoned. Nothing was saved.",
            "✗".red()
        );
        std::process::exit(130);
    });
}

fn progress_bar() -> Result<ProgressBar> {
    if ui::is_quiet() {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(u64::from(TOTAL_STEPS));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

pub fn cmd_subscribe(layout: Option<Layout>, output: &OutputArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!(
            "The subscription wizard needs an interactive terminal.\n\n\
             To submit from a script, pass every field instead:\n  \
             fireup fill --name \"Jane Doe\" --phone +14155550123 --email jane@example.com \\\n    \
             --nationality US --residence US --age 30"
        );
    }

    let config = super::load_config()?;
    let layout = layout.unwrap_or(config.layout());
    let mut form = config.controller()?;
    let mut handler = submission_handler(&config, output)?;

    setup_signal_handler();
    let pb = progress_bar()?;

    let submission = loop {
        pb.set_position(u64::from(form.step().index()));
        pb.set_message(ui::step_track(form.state()));

        let Some(event) = pb.suspend(|| next_event(&mut form, &config, layout))? else {
            pb.abandon();
            println!("{}", ui::colors::secondary("Maybe next time."));
            return Ok(());
        };

        match form.handle(event) {
            EventOutcome::Navigated(Transition::Blocked { errors, .. }) => {
                pb.suspend(|| print_errors(&errors));
            }
            EventOutcome::SubmitRejected(SubmitError::Invalid(errors)) => {
                pb.suspend(|| print_errors(&errors));
            }
            EventOutcome::SubmitRejected(e) => return Err(e.into()),
            EventOutcome::Submitted(submission) => break submission,
            _ => {}
        }
    };

    pb.set_position(u64::from(TOTAL_STEPS));
    pb.finish_and_clear();
    deliver(handler.as_mut(), &submission)
}

/// Render the current screen and return the event it produced, or `None`
/// if the user declined to start.
fn next_event(
    form: &mut FormController,
    config: &Config,
    layout: Layout,
) -> Result<Option<FormEvent>> {
    let step = form.step();

    if step.is_intro() {
        println!(
            "\n{}",
            ui::colors::heading("Welcome to the FireUpClub Subscription")
        );
        println!("Begin your journey with us. Fill out the form and get registered with FireupClub.\n");
        let start = Confirm::new()
            .with_prompt("Get Started")
            .default(true)
            .interact()?;
        return Ok(start.then_some(FormEvent::EnterPressed));
    }

    println!(
        "\n{} {}",
        ui::colors::heading(&step.to_string()),
        ui::colors::secondary(&format!(
            "({} complete, type {} to go back)",
            ui::format::percent(form.progress()),
            BACK
        ))
    );

    let unchecked = layout.unchecked_fields(step);
    for field in layout.fields_shown(step) {
        if let Some(message) = form.error(field) {
            eprintln!("  {} {}", "✗".red(), ui::colors::error(message));
        }
        if unchecked.contains(&field) {
            println!(
                "  {}",
                ui::colors::secondary(&format!(
                    "{} is checked on step {}",
                    field,
                    Step::owning(field).index()
                ))
            );
        }

        match prompt_field(form, config, field)? {
            Answer::Back => return Ok(Some(FormEvent::PreviousRequested)),
            Answer::Value(value) => apply_input(form, config, field, &value),
        }
    }

    if step.is_final() {
        let submit = Confirm::new()
            .with_prompt("Submit")
            .default(true)
            .interact()?;
        return Ok(Some(if submit {
            FormEvent::SubmitRequested
        } else {
            FormEvent::PreviousRequested
        }));
    }

    Ok(Some(FormEvent::NextRequested))
}

fn prompt_field(form: &FormController, config: &Config, field: Field) -> Result<Answer> {
    if field.is_country() {
        return prompt_country(form, config, field);
    }

    let mut input = Input::<String>::new()
        .with_prompt(format!("{} ({})", field.label(), field.placeholder()))
        .allow_empty(true);
    if !form.value(field).is_empty() {
        input = input.with_initial_text(form.value(field));
    }
    let value = input.interact_text()?;

    if value.trim() == BACK {
        Ok(Answer::Back)
    } else {
        Ok(Answer::Value(value))
    }
}

fn prompt_country(form: &FormController, config: &Config, field: Field) -> Result<Answer> {
    let countries = form.countries();
    let options = countries.options();

    let mut items: Vec<String> = Vec::with_capacity(options.len() + 1);
    items.push(BACK_ITEM.to_string());
    items.extend(options.iter().map(|o| format!("{} ({})", o.label, o.value)));

    let current = Some(form.value(field))
        .filter(|v| !v.is_empty())
        .unwrap_or(config.form.default_country.as_str());
    let default = options
        .iter()
        .position(|o| o.value == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(field.label())
        .items(&items)
        .default(default)
        .max_length(12)
        .interact()?;

    if selection == 0 {
        Ok(Answer::Back)
    } else {
        Ok(Answer::Value(options[selection - 1].value.clone()))
    }
}
