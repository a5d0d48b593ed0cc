//! Multi-step subscription form: fields, rules, steps and the controller
//! that moves between them.
//!
//! # Example
//!
//! ```
//! use fireup::form::{Field, FormController, Step, Transition};
//!
//! let mut form = FormController::default();
//! form.advance(); // leave the intro screen
//!
//! assert!(form.advance().is_blocked());
//! assert_eq!(form.error(Field::Name), Some("Name is required."));
//!
//! form.set_field(Field::Name, "Jane Doe");
//! assert!(matches!(form.advance(), Transition::Moved { .. }));
//! assert_eq!(form.step(), Step::new(2).unwrap());
//! ```

pub mod event;
pub mod field;
pub mod rules;
pub mod state_machine;
pub mod step;

pub use event::{EventOutcome, FormEvent};
pub use field::{Field, FieldErrors, FieldValues};
pub use rules::{messages, FieldValidationError, Validator, DEFAULT_MIN_AGE};
pub use state_machine::{FormController, FormState, Phase, SubmitError, Transition};
pub use step::{Step, TOTAL_STEPS};
