//! Text templates for console output.
//!
//! Templates are embedded and rendered with Tera. The submission summary can
//! be overridden per project (`submission.template` in the config).

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tera::Tera;

pub const SUBMISSION_TEMPLATE: &str = "submission.txt";
pub const CONTACT_TEMPLATE: &str = "contact.txt";
pub const TEAM_TEMPLATE: &str = "team.txt";

mod embedded {
    pub const SUBMISSION_TXT: &str = r#"Form Data:
  name:        {{ name }}
  phone:       {{ phone }}
  email:       {{ email }}
  nationality: {{ nationality }}
  residence:   {{ residence }}
  age:         {{ age }}
{%- if linkedin %}
  linkedin:    {{ linkedin }}
{%- endif %}
"#;

    pub const CONTACT_TXT: &str = r#"{{ heading }}

  Email:   {{ email }}
  Address: {{ address }}
  Phone:   {{ phone }}

Ready to join? Run `fireup subscribe` to get started.
"#;

    pub const TEAM_TXT: &str = r#"{{ heading }}
{% for member in members %}
  {{ member.name }}
    {{ member.role }}
{%- endfor %}
"#;
}

/// Embedded templates plus any project override.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load the embedded templates, replacing the submission summary with
    /// the file at `submission_override` when given.
    pub fn new(submission_override: Option<&Path>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(SUBMISSION_TEMPLATE, embedded::SUBMISSION_TXT)?;
        tera.add_raw_template(CONTACT_TEMPLATE, embedded::CONTACT_TXT)?;
        tera.add_raw_template(TEAM_TEMPLATE, embedded::TEAM_TXT)?;
        tera.autoescape_on(vec![]);

        if let Some(path) = submission_override {
            let content = std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read submission template {}", path.display())
            })?;
            tera.add_raw_template(SUBMISSION_TEMPLATE, &content)
                .with_context(|| format!("Invalid submission template {}", path.display()))?;
        }

        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let context = tera::Context::from_serialize(data)
            .with_context(|| format!("Failed to build context for template {}", name))?;
        self.tera
            .render(name, &context)
            .with_context(|| format!("Failed to render template {}", name))
    }
}
