//! Presentation events and their dispatch onto the controller.

use super::field::Field;
use super::state_machine::{FormController, SubmitError, Transition};
use crate::submission::Submission;

/// A discrete user interaction coming from whatever renders the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldEdited { field: Field, value: String },
    SelectionMade { field: Field, choice: Option<String> },
    NextRequested,
    PreviousRequested,
    SubmitRequested,
    /// Enter advances the current step, or submits from the final one.
    EnterPressed,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Edited(Field),
    /// The edit arrived after submission and was dropped.
    Ignored,
    Navigated(Transition),
    Submitted(Submission),
    SubmitRejected(SubmitError),
}

impl FormController {
    /// Apply one event. Each event completes fully before the next is handled.
    pub fn handle(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::FieldEdited { field, value } => edited(field, self.set_field(field, value)),
            FormEvent::SelectionMade { field, choice } => {
                edited(field, self.select(field, choice.as_deref()))
            }
            FormEvent::NextRequested => EventOutcome::Navigated(self.advance()),
            FormEvent::PreviousRequested => EventOutcome::Navigated(self.retreat()),
            FormEvent::SubmitRequested => self.submit_outcome(),
            FormEvent::EnterPressed => {
                if self.step().is_final() && !self.state().is_completed() {
                    self.submit_outcome()
                } else {
                    EventOutcome::Navigated(self.advance())
                }
            }
        }
    }

    fn submit_outcome(&mut self) -> EventOutcome {
        match self.submit() {
            Ok(submission) => EventOutcome::Submitted(submission),
            Err(e) => EventOutcome::SubmitRejected(e),
        }
    }
}

fn edited(field: Field, applied: bool) -> EventOutcome {
    if applied {
        EventOutcome::Edited(field)
    } else {
        EventOutcome::Ignored
    }
}
