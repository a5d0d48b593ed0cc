//! Per-field validation rules.
//!
//! Each rule is a predicate over one field's current value with a fixed,
//! user-facing message on failure. Rules never look at other fields.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::field::{Field, FieldValues};
use super::step::Step;
use crate::phone::{to_e164_candidate, E164Validator, PhoneValidator};

/// Messages shown next to a failing field.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required.";
    pub const PHONE_REQUIRED: &str = "Phone number is required.";
    pub const PHONE_INVALID: &str = "Invalid phone number.";
    pub const EMAIL_REQUIRED: &str = "Email is required.";
    pub const EMAIL_INVALID: &str = "Invalid email format.";
    pub const LINKEDIN_INVALID: &str =
        "Invalid URL format. The URL must start with http:// or https://";
    pub const NATIONALITY_REQUIRED: &str = "Nationality is required.";
    pub const RESIDENCE_REQUIRED: &str = "Country of Residence is required.";
    pub const AGE_REQUIRED: &str = "Age is required.";
    pub const AGE_INVALID: &str = "Invalid age.";
}

/// Smallest accepted age unless configured otherwise.
pub const DEFAULT_MIN_AGE: u32 = 1;

/// A field failed its rule. Always recoverable; shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldValidationError {}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^https?://.+$").expect("static regex"))
}

/// Applies the field rules. Owns the phone predicate so callers can swap in
/// a stricter one.
pub struct Validator {
    phone: Box<dyn PhoneValidator>,
    min_age: u32,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("min_age", &self.min_age)
            .finish_non_exhaustive()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(E164Validator::default())
    }
}

impl Validator {
    pub fn new(phone: impl PhoneValidator + 'static) -> Self {
        Self {
            phone: Box::new(phone),
            min_age: DEFAULT_MIN_AGE,
        }
    }

    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age.max(1);
        self
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Check one value against its field's rule.
    pub fn check(&self, field: Field, value: &str) -> Result<(), FieldValidationError> {
        let value = value.trim();
        let failure = match field {
            Field::Name => value.is_empty().then_some(messages::NAME_REQUIRED),
            Field::Phone => self.check_phone(value),
            Field::Email => {
                if value.is_empty() {
                    Some(messages::EMAIL_REQUIRED)
                } else if !email_pattern().is_match(value) {
                    Some(messages::EMAIL_INVALID)
                } else {
                    None
                }
            }
            Field::Linkedin => {
                (!value.is_empty() && !url_pattern().is_match(value))
                    .then_some(messages::LINKEDIN_INVALID)
            }
            Field::Nationality => value.is_empty().then_some(messages::NATIONALITY_REQUIRED),
            Field::Residence => value.is_empty().then_some(messages::RESIDENCE_REQUIRED),
            Field::Age => self.check_age(value),
        };

        match failure {
            Some(message) => Err(FieldValidationError::new(field, message)),
            None => Ok(()),
        }
    }

    fn check_phone(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            return Some(messages::PHONE_REQUIRED);
        }
        match to_e164_candidate(value) {
            Some(candidate) if self.phone.is_valid(&candidate) => None,
            _ => Some(messages::PHONE_INVALID),
        }
    }

    fn check_age(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            return Some(messages::AGE_REQUIRED);
        }
        match value.parse::<f64>() {
            Ok(age) if age.is_finite() && age >= f64::from(self.min_age) => None,
            _ => Some(messages::AGE_INVALID),
        }
    }

    /// Check only the fields owned by `step`. The intro step always passes.
    pub fn check_step(&self, step: Step, values: &FieldValues) -> Vec<FieldValidationError> {
        step.fields()
            .iter()
            .filter_map(|field| self.check(*field, values.get(*field)).err())
            .collect()
    }
}
