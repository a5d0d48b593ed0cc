//! Validation logic for configuration sections.

use anyhow::Result;

use super::defaults::FormConfig;
use crate::phone::E164_MAX_DIGITS;

impl FormConfig {
    /// Validate form configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_age == 0 {
            anyhow::bail!("form.min_age must be at least 1");
        }

        if self.default_country.len() != 2
            || !self
                .default_country
                .chars()
                .all(|c| c.is_ascii_uppercase())
        {
            anyhow::bail!(
                "form.default_country must be a two-letter uppercase country code, got '{}'",
                self.default_country
            );
        }

        if !(1..=E164_MAX_DIGITS).contains(&self.phone_min_digits) {
            anyhow::bail!(
                "form.phone_min_digits must be between 1 and {}, got {}",
                E164_MAX_DIGITS,
                self.phone_min_digits
            );
        }

        Ok(())
    }
}
