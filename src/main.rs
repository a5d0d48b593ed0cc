//! CLI entry point for fireup.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use fireup::form::{Field, FieldValues};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("FIREUP_QUIET", "1");
    }

    match cli.command {
        Commands::Subscribe { layout, output } => cmd::subscribe::cmd_subscribe(layout, &output),
        Commands::Fill {
            name,
            phone,
            email,
            linkedin,
            nationality,
            residence,
            age,
            output,
        } => {
            let mut values = FieldValues::default();
            for (field, value) in [
                (Field::Name, name),
                (Field::Phone, phone),
                (Field::Email, email),
                (Field::Linkedin, linkedin),
                (Field::Nationality, nationality),
                (Field::Residence, residence),
                (Field::Age, age),
            ] {
                values.set(field, value);
            }
            cmd::fill::cmd_fill(values, &output)
        }
        Commands::Check { field, value } => cmd::check::cmd_check(field, &value),
        Commands::Countries { query, json } => {
            cmd::countries::cmd_countries(query.as_deref(), json)
        }
        Commands::Contact => cmd::info::cmd_contact(),
        Commands::Team => cmd::info::cmd_team(),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
