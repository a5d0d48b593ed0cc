//! CLI argument definitions for fireup.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use fireup::config::OutputFormat;
use fireup::form::Field;
use fireup::layout::Layout;

#[derive(Parser)]
#[command(name = "fireup")]
#[command(version)]
#[command(about = "FireUpClub subscription form", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    fireup subscribe            Interactive subscription wizard\n    fireup fill --help          Submit every field from the command line\n\n    Settings are read from ~/.config/fireup/config.md and .fireup/config.md."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Submission destination flags shared by `subscribe` and `fill`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print the submission as text or json (overrides submission.format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write the submission as JSON into this directory instead of printing it
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the subscription form interactively
    ///
    /// Fields are pre-filled with what was entered before. Press Enter to
    /// keep a value, or type `<` to go back one step.
    Subscribe {
        /// Screen layout (overrides form.layout)
        #[arg(long, value_enum)]
        layout: Option<Layout>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run the form non-interactively with every value given up front
    ///
    /// Stops at the first step that fails validation and prints its errors.
    Fill {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,
        /// Phone number, international or national (default country's dial code is added)
        #[arg(long, default_value = "")]
        phone: String,
        /// Email address
        #[arg(long, default_value = "")]
        email: String,
        /// LinkedIn profile URL
        #[arg(long, default_value = "")]
        linkedin: String,
        /// Nationality (country code or name)
        #[arg(long, default_value = "")]
        nationality: String,
        /// Country of residence (country code or name)
        #[arg(long, default_value = "")]
        residence: String,
        /// Age in years
        #[arg(long, default_value = "")]
        age: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a single value against a field's rule
    Check {
        /// Field name (name, phone, email, linkedin, nationality, residence, age)
        field: Field,
        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// List or search the country list
    Countries {
        /// Filter by code or part of the name
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show contact details
    Contact,
    /// Show the team roster
    Team,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Output directory for the man page
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
