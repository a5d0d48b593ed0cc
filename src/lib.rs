//! # FireUp - Subscription Form Engine
//!
//! FireUp drives the FireUpClub subscription form: a six-step sequence that
//! collects a subscriber's details, validates each step before letting them
//! move on, and hands the completed record to a submission handler.
//!
//! ## Core Concepts
//!
//! - **Steps**: an intro screen followed by six field steps
//! - **Fields**: name, phone, email, nationality, residence, age and an
//!   optional LinkedIn URL
//! - **Validation rules**: a predicate and message per field, checked only
//!   for the step being left
//!
//! ## Modules
//!
//! - [`form`] - Field records, rules and the step state machine
//! - [`phone`] - Phone number validity predicate
//! - [`countries`] - Country reference list for the country pickers
//! - [`submission`] - The submitted record and its handlers
//! - [`layout`] - Presentation skins over the state machine
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```
//! use fireup::form::{Field, FormController};
//!
//! let mut form = FormController::default();
//! form.advance();
//! for (field, value) in [
//!     (Field::Name, "Jane Doe"),
//!     (Field::Phone, "+14155550123"),
//!     (Field::Email, "jane@example.com"),
//!     (Field::Nationality, "US"),
//!     (Field::Residence, "US"),
//! ] {
//!     form.set_field(field, value);
//!     form.advance();
//! }
//! form.set_field(Field::Age, "30");
//!
//! let submission = form.submit().expect("all steps valid");
//! assert_eq!(submission.email, "jane@example.com");
//! ```

pub mod config;
pub mod countries;
pub mod form;
pub mod id;
pub mod layout;
pub mod phone;
pub mod showcase;
pub mod submission;
pub mod templates;
pub mod ui;

/// Default path constants for the fireup directory structure.
pub mod paths {
    /// Project directory: `.fireup`
    pub const FIREUP_DIR: &str = ".fireup";
    /// Project config file: `.fireup/config.md`
    pub const CONFIG_FILE: &str = ".fireup/config.md";
}
