//! Presentation skins over the single form state machine.
//!
//! Both layouts drive the same [`FormController`](crate::form::FormController)
//! and validate only the current step's fields. They differ only in which
//! inputs a screen shows.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::form::{Field, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One field group per screen.
    #[default]
    Stepped,
    /// Every field on the first screen, one field per screen afterwards.
    Combined,
}

impl Layout {
    /// Inputs rendered on `step`, in display order.
    pub fn fields_shown(&self, step: Step) -> Vec<Field> {
        match self {
            Layout::Combined if step == Step::FIRST => Field::ALL.to_vec(),
            _ => step.fields().to_vec(),
        }
    }

    /// Inputs on `step` that the step does not validate. Edits to these are
    /// kept but only checked when their own step is left.
    pub fn unchecked_fields(&self, step: Step) -> Vec<Field> {
        self.fields_shown(step)
            .into_iter()
            .filter(|f| !step.fields().contains(f))
            .collect()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Stepped => write!(f, "stepped"),
            Layout::Combined => write!(f, "combined"),
        }
    }
}
