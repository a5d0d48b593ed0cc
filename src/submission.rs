//! The submitted record and the handlers that receive it.
//!
//! The form controller's contract ends when it yields a [`Submission`].
//! Whatever happens next (printing it, writing it to disk) belongs to a
//! [`SubmissionHandler`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::form::FieldValues;
use crate::id;
use crate::templates::{Templates, SUBMISSION_TEMPLATE};

/// Everything the subscriber entered, as handed to the submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub nationality: String,
    pub residence: String,
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Submission {
    pub fn from_values(values: &FieldValues) -> Self {
        let linkedin = values.linkedin.trim();
        Self {
            name: values.name.trim().to_string(),
            phone: values.phone.trim().to_string(),
            email: values.email.trim().to_string(),
            nationality: values.nationality.trim().to_string(),
            residence: values.residence.trim().to_string(),
            age: values.age.trim().to_string(),
            linkedin: (!linkedin.is_empty()).then(|| linkedin.to_string()),
        }
    }
}

/// Where a handler put the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Printed,
    Written(PathBuf),
}

/// Receives a completed submission.
pub trait SubmissionHandler {
    fn deliver(&mut self, submission: &Submission) -> Result<Delivery>;
}

/// Prints the form data followed by the confirmation line.
pub struct ConsoleHandler<W: Write> {
    out: W,
    templates: Templates,
}

impl ConsoleHandler<std::io::Stdout> {
    pub fn stdout(templates: Templates) -> Self {
        Self::new(std::io::stdout(), templates)
    }
}

impl<W: Write> ConsoleHandler<W> {
    pub fn new(out: W, templates: Templates) -> Self {
        Self { out, templates }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SubmissionHandler for ConsoleHandler<W> {
    fn deliver(&mut self, submission: &Submission) -> Result<Delivery> {
        let summary = self.templates.render(SUBMISSION_TEMPLATE, submission)?;
        write!(self.out, "{}", summary)?;
        if !summary.ends_with('\n') {
            writeln!(self.out)?;
        }
        writeln!(self.out, "Form Submitted!")?;
        self.out.flush()?;
        Ok(Delivery::Printed)
    }
}

/// Prints the submission as a single JSON document.
pub struct JsonHandler<W: Write> {
    out: W,
}

impl<W: Write> JsonHandler<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SubmissionHandler for JsonHandler<W> {
    fn deliver(&mut self, submission: &Submission) -> Result<Delivery> {
        serde_json::to_writer_pretty(&mut self.out, submission)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(Delivery::Printed)
    }
}

/// Writes each submission to `<dir>/<id>.json`. The file appears atomically.
pub struct JsonFileHandler {
    dir: PathBuf,
}

impl JsonFileHandler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SubmissionHandler for JsonFileHandler {
    fn deliver(&mut self, submission: &Submission) -> Result<Delivery> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let id = id::generate_id(&self.dir)?;
        let path = self.dir.join(format!("{}.{}", id, id::SUBMISSION_EXT));

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create temp file in {}", self.dir.display()))?;
        serde_json::to_writer_pretty(&mut tmp, submission)?;
        writeln!(tmp)?;
        tmp.persist(&path)
            .with_context(|| format!("Failed to write submission to {}", path.display()))?;

        Ok(Delivery::Written(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use tempfile::TempDir;

    fn sample() -> Submission {
        let mut values = FieldValues::default();
        values.set(Field::Name, " Jane Doe ");
        values.set(Field::Phone, "+14155550123");
        values.set(Field::Email, "jane@example.com");
        values.set(Field::Nationality, "US");
        values.set(Field::Residence, "US");
        values.set(Field::Age, "30");
        Submission::from_values(&values)
    }

    #[test]
    fn test_from_values_trims_and_drops_empty_linkedin() {
        let submission = sample();
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.linkedin, None);

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("linkedin").is_none());
    }

    #[test]
    fn test_console_handler_logs_and_confirms() {
        let mut handler = ConsoleHandler::new(Vec::new(), Templates::new(None).unwrap());
        let delivery = handler.deliver(&sample()).unwrap();
        assert_eq!(delivery, Delivery::Printed);

        let out = String::from_utf8(handler.into_inner()).unwrap();
        assert!(out.starts_with("Form Data:"));
        assert!(out.contains("jane@example.com"));
        assert!(out.trim_end().ends_with("Form Submitted!"));
    }

    #[test]
    fn test_json_handler() {
        let mut handler = JsonHandler::new(Vec::new());
        handler.deliver(&sample()).unwrap();
        let parsed: Submission = serde_json::from_slice(&handler.into_inner()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_json_file_handler_writes_sequenced_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("submissions");
        let mut handler = JsonFileHandler::new(&dir);

        let first = handler.deliver(&sample()).unwrap();
        let second = handler.deliver(&sample()).unwrap();

        let (Delivery::Written(first), Delivery::Written(second)) = (first, second) else {
            panic!("Expected files to be written");
        };
        assert_ne!(first, second);

        let content = std::fs::read_to_string(&second).unwrap();
        let parsed: Submission = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.email, "jane@example.com");
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
    }
}
