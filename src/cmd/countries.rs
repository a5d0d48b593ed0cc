//! Country list browsing.

use anyhow::Result;
use colored::Colorize;

use fireup::ui;

pub fn cmd_countries(query: Option<&str>, json: bool) -> Result<()> {
    let config = super::load_config()?;
    let list = config.country_list()?;
    let matches = list.search(query.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        if let Some(query) = query {
            println!("No countries match '{}'.", query);
        }
        return Ok(());
    }

    for country in &matches {
        println!(
            "{}  {}  {}",
            country.code.cyan(),
            ui::format::column(&country.name, 44),
            ui::colors::secondary(country.dial.as_deref().unwrap_or(""))
        );
    }

    if !ui::is_quiet() {
        println!(
            "\n{}",
            ui::colors::secondary(&format!("{} of {} countries", matches.len(), list.len()))
        );
    }

    Ok(())
}
