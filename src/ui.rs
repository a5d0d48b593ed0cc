//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for step icons, colors, and
//! formatting patterns used throughout the fireup CLI.

use colored::{ColoredString, Colorize};

use crate::form::{FormState, Step};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("FIREUP_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Where a step stands relative to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Blocked,
    Upcoming,
}

impl StepStatus {
    pub fn of(step: Step, state: &FormState) -> Self {
        let current = state.step();
        if state.is_completed() || step < current {
            StepStatus::Done
        } else if step == current {
            let has_errors = step
                .fields()
                .iter()
                .any(|f| state.errors().get(*f).is_some());
            if has_errors {
                StepStatus::Blocked
            } else {
                StepStatus::Current
            }
        } else {
            StepStatus::Upcoming
        }
    }
}

/// Returns a colored icon for a step's status.
///
/// Icons:
/// - Done: ● (green)
/// - Current: ◐ (yellow)
/// - Blocked: ✗ (red)
/// - Upcoming: ○ (dimmed)
pub fn step_icon(status: StepStatus) -> ColoredString {
    match status {
        StepStatus::Done => "●".green(),
        StepStatus::Current => "◐".yellow(),
        StepStatus::Blocked => "✗".red(),
        StepStatus::Upcoming => "○".dimmed(),
    }
}

/// One icon per field step, e.g. `● ● ◐ ○ ○ ○`.
pub fn step_track(state: &FormState) -> String {
    Step::all_field_steps()
        .map(|step| step_icon(StepStatus::of(step, state)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (field names, country codes)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Whole-number percentage for a 0.0..=1.0 fraction
    pub fn percent(fraction: f64) -> String {
        format!("{:.0}%", (fraction.clamp(0.0, 1.0) * 100.0).round())
    }

    /// Left-align `label` in a column of `width` characters
    pub fn column(label: &str, width: usize) -> String {
        format!("{:<width$}", label, width = width)
    }
}
