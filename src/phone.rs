//! Phone number validity predicate.
//!
//! The form treats phone validation as a black box: any [`PhoneValidator`]
//! can be plugged into the controller. [`E164Validator`] is the built-in
//! structural check used by the CLI.

use regex::Regex;
use std::sync::OnceLock;

/// Longest number E.164 allows, country code included.
pub const E164_MAX_DIGITS: usize = 15;

/// Fewest digits accepted by default (country code plus a national number).
pub const DEFAULT_MIN_DIGITS: usize = 10;

/// Decides whether an E.164 candidate (`+` followed by digits) is a real number.
pub trait PhoneValidator {
    fn is_valid(&self, e164: &str) -> bool;
}

impl<F> PhoneValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, e164: &str) -> bool {
        self(e164)
    }
}

/// Structural E.164 check: leading `+`, no leading zero, bounded digit count.
#[derive(Debug, Clone, Copy)]
pub struct E164Validator {
    min_digits: usize,
}

impl E164Validator {
    pub fn new(min_digits: usize) -> Self {
        Self {
            min_digits: min_digits.clamp(1, E164_MAX_DIGITS),
        }
    }
}

impl Default for E164Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DIGITS)
    }
}

fn e164_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+[1-9][0-9]*$").expect("static regex"))
}

impl PhoneValidator for E164Validator {
    fn is_valid(&self, e164: &str) -> bool {
        if !e164_pattern().is_match(e164) {
            return false;
        }
        let digits = e164.len() - 1;
        (self.min_digits..=E164_MAX_DIGITS).contains(&digits)
    }
}

/// Digits of a phone entry, with spaces, dashes, parentheses and any leading
/// `+` removed.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Build the E.164 candidate for a raw entry by prefixing its digits with `+`.
/// Returns `None` when the entry has no digits at all.
pub fn to_e164_candidate(value: &str) -> Option<String> {
    let digits = digits_only(value);
    if digits.is_empty() {
        None
    } else {
        Some(format!("+{}", digits))
    }
}

/// Prefix a national number with a dial code unless the entry is already
/// international. A leading `00` is the international prefix and becomes `+`.
pub fn with_dial_code(value: &str, dial_code: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with('+') {
        return trimmed.to_string();
    }
    if let Some(international) = trimmed.strip_prefix("00") {
        return format!("+{}", digits_only(international));
    }
    let national = digits_only(trimmed);
    let national = national.trim_start_matches('0');
    format!("+{}{}", digits_only(dial_code), national)
}
