//! Form fields and the fixed-shape records that hold their values and errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single named piece of user-entered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Linkedin,
    Nationality,
    Residence,
    Age,
}

impl Field {
    /// Every field, in the order the combined layout renders them.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Linkedin,
        Field::Nationality,
        Field::Residence,
        Field::Age,
    ];

    /// Key used in submissions and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Linkedin => "linkedin",
            Self::Nationality => "nationality",
            Self::Residence => "residence",
            Self::Age => "age",
        }
    }

    /// Label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Enter Full Name *",
            Self::Phone => "Enter Phone Number *",
            Self::Email => "Enter Email *",
            Self::Linkedin => "LinkedIn URL (If any)",
            Self::Nationality => "Select Nationality *",
            Self::Residence => "Country of Residence *",
            Self::Age => "Enter Your Age *",
        }
    }

    /// Placeholder text for free-text inputs.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Linkedin => "LinkedIn URL",
            Self::Nationality | Self::Residence => "Select Country",
            Self::Age => "Age",
        }
    }

    /// Whether the field must be filled in before its step can be left.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Linkedin)
    }

    /// Whether the field is picked from the country list rather than typed.
    pub fn is_country(&self) -> bool {
        matches!(self, Self::Nationality | Self::Residence)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "linkedin" => Ok(Self::Linkedin),
            "nationality" => Ok(Self::Nationality),
            "residence" => Ok(Self::Residence),
            "age" => Ok(Self::Age),
            other => anyhow::bail!(
                "Unknown field '{}'. Expected one of: name, phone, email, linkedin, nationality, residence, age",
                other
            ),
        }
    }
}

/// Current value of every field. Empty string means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub nationality: String,
    pub residence: String,
    pub age: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Linkedin => &self.linkedin,
            Field::Nationality => &self.nationality,
            Field::Residence => &self.residence,
            Field::Age => &self.age,
        }
    }

    pub fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Linkedin => &mut self.linkedin,
            Field::Nationality => &mut self.nationality,
            Field::Residence => &mut self.residence,
            Field::Age => &mut self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }
}

/// One optional error message per field. `None` means the field is valid
/// (or has not been checked yet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub nationality: Option<String>,
    pub residence: Option<String>,
    pub age: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Linkedin => &self.linkedin,
            Field::Nationality => &self.nationality,
            Field::Residence => &self.residence,
            Field::Age => &self.age,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Linkedin => &mut self.linkedin,
            Field::Nationality => &mut self.nationality,
            Field::Residence => &mut self.residence,
            Field::Age => &mut self.age,
        }
    }

    /// Replace the field's message. Messages are overwritten, never accumulated.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.slot(*f).is_none())
    }

    /// Fields that currently carry an error, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |f| self.get(*f).map(|msg| (*f, msg)))
    }
}
