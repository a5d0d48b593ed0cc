//! Step transition state machine for the subscription form.
//!
//! The controller owns one [`FormState`] for the lifetime of a form session.
//! Transitions are gated by validation of the current step's fields only;
//! a failed validation never errors out, it records messages on the state
//! and leaves the step where it was.

use std::fmt;

use super::field::{Field, FieldErrors, FieldValues};
use super::rules::{FieldValidationError, Validator};
use super::step::Step;
use crate::countries::CountryList;
use crate::submission::Submission;

/// Whether the session still accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Active,
    /// Submitted; the payload has been handed off and the state is frozen.
    Completed,
}

/// Everything one form session knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    step: Step,
    fields: FieldValues,
    errors: FieldErrors,
    phase: Phase,
}

impl FormState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Navigation had nowhere to go (retreat on step 1).
    Stayed(Step),
    /// The step's fields failed validation; `errors` were recorded on the state.
    Blocked {
        step: Step,
        errors: Vec<FieldValidationError>,
    },
    /// The final step validated, but only `submit()` can leave it.
    AtFinalStep,
    /// The session was already submitted.
    Closed,
}

impl Transition {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Transition::Blocked { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NotAtFinalStep(Step),
    Invalid(Vec<FieldValidationError>),
    AlreadySubmitted,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotAtFinalStep(step) => {
                write!(f, "Form can only be submitted from the last step (currently at {})", step)
            }
            SubmitError::Invalid(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "Form has invalid fields: {}", messages.join("; "))
            }
            SubmitError::AlreadySubmitted => write!(f, "Form was already submitted"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Drives one form session.
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    validator: Validator,
    countries: CountryList,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Validator::default(), CountryList::builtin())
    }
}

impl FormController {
    pub fn new(validator: Validator, countries: CountryList) -> Self {
        Self {
            state: FormState::default(),
            validator,
            countries,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn countries(&self) -> &CountryList {
        &self.countries
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.state.errors.get(field)
    }

    /// Fraction of the form completed.
    pub fn progress(&self) -> f64 {
        self.state.step.progress()
    }

    /// Store a typed value. Editing clears the field's error right away,
    /// before anything revalidates it. Returns false once submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.state.is_completed() {
            return false;
        }
        self.state.fields.set(field, value);
        self.state.errors.clear(field);
        true
    }

    /// Store a picked option. Country fields resolve the choice against the
    /// country list; anything unrecognized becomes "no selection".
    pub fn select(&mut self, field: Field, choice: Option<&str>) -> bool {
        let value = match choice {
            Some(choice) if field.is_country() => self
                .countries
                .resolve(choice)
                .map(|country| country.code.clone())
                .unwrap_or_default(),
            Some(choice) => choice.to_string(),
            None => String::new(),
        };
        self.set_field(field, value)
    }

    /// Validate the current step's fields, recording or clearing their errors.
    pub fn validate_current(&mut self) -> Vec<FieldValidationError> {
        let step = self.state.step;
        let failures = self.validator.check_step(step, &self.state.fields);
        for field in step.fields() {
            match failures.iter().find(|e| e.field == *field) {
                Some(failure) => self.state.errors.set(*field, failure.message.clone()),
                None => self.state.errors.clear(*field),
            }
        }
        failures
    }

    /// Move forward one step if the current step's fields are valid.
    pub fn advance(&mut self) -> Transition {
        if self.state.is_completed() {
            return Transition::Closed;
        }

        let from = self.state.step;
        if from.is_intro() {
            self.state.step = Step::FIRST;
            return Transition::Moved {
                from,
                to: Step::FIRST,
            };
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            return Transition::Blocked { step: from, errors };
        }

        match from.next() {
            Some(to) => {
                self.state.step = to;
                Transition::Moved { from, to }
            }
            None => Transition::AtFinalStep,
        }
    }

    /// Move back one step without validating. Never returns to the intro.
    pub fn retreat(&mut self) -> Transition {
        if self.state.is_completed() {
            return Transition::Closed;
        }

        let from = self.state.step;
        let to = from.previous();
        if to == from {
            return Transition::Stayed(from);
        }
        self.state.step = to;
        Transition::Moved { from, to }
    }

    /// Finish the session from the final step, yielding the collected record.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.state.is_completed() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.state.step.is_final() {
            return Err(SubmitError::NotAtFinalStep(self.state.step));
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        self.state.phase = Phase::Completed;
        Ok(Submission::from_values(&self.state.fields))
    }

    /// Hand back the session state, ending the controller's ownership.
    pub fn into_state(self) -> FormState {
        self.state
    }
}
