//! Single-value rule check.

use anyhow::Result;
use colored::Colorize;

use fireup::form::Field;

pub fn cmd_check(field: Field, value: &str) -> Result<()> {
    let config = super::load_config()?;
    let mut form = config.controller()?;

    // Run the value through the same input normalization the form uses
    super::apply_input(&mut form, &config, field, value);
    let stored = form.value(field).to_string();

    match form.validator().check(field, &stored) {
        Ok(()) => {
            if stored != value.trim() {
                println!(
                    "{} {} is valid (stored as {})",
                    "✓".green(),
                    field.as_str().cyan(),
                    stored.cyan()
                );
            } else {
                println!("{} {} is valid", "✓".green(), field.as_str().cyan());
            }
            Ok(())
        }
        Err(e) => {
            super::print_errors(&[e]);
            anyhow::bail!("{} is invalid", field)
        }
    }
}
