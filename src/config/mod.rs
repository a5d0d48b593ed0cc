//! Configuration for the subscription form.
//!
//! Config files are markdown with YAML frontmatter. A global file in
//! `~/.config/fireup/config.md` is merged under the project's
//! `.fireup/config.md`; both are optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::countries::CountryList;
use crate::form::{FormController, Validator};
use crate::layout::Layout;
use crate::paths::CONFIG_FILE;
use crate::phone::E164Validator;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub countries: CountriesConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/fireup/config.md)
    /// 2. Project config (.fireup/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        PartialConfig::parse(content)?.merge_with(PartialConfig::default())
    }

    /// Load merged configuration from specified global and project config paths.
    /// Missing files contribute nothing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        global_config.merge_with(project_config)
    }

    /// Field rules built from the form section.
    pub fn validator(&self) -> Validator {
        Validator::new(E164Validator::new(self.form.phone_min_digits)).with_min_age(self.form.min_age)
    }

    /// The configured country list, or the built-in one.
    pub fn country_list(&self) -> Result<CountryList> {
        match &self.countries.path {
            Some(path) => CountryList::load_from(&expand_path(path)),
            None => Ok(CountryList::builtin()),
        }
    }

    /// A fresh controller wired with this config's rules and countries.
    pub fn controller(&self) -> Result<FormController> {
        let countries = self.country_list()?;
        if countries.get(&self.form.default_country).is_none() {
            eprintln!(
                "{} form.default_country '{}' is not in the country list",
                crate::ui::colors::warning("Warning:"),
                self.form.default_country
            );
        }
        Ok(FormController::new(self.validator(), countries))
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.submission.output_dir.as_deref().map(expand_path)
    }

    pub fn template_path(&self) -> Option<PathBuf> {
        self.submission.template.as_deref().map(expand_path)
    }

    pub fn layout(&self) -> Layout {
        self.form.layout
    }
}

/// Returns the path to the global config file at ~/.config/fireup/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/fireup/config.md"))
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub form: Option<PartialFormConfig>,
    pub submission: Option<PartialSubmissionConfig>,
    pub countries: Option<CountriesConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialFormConfig {
    pub layout: Option<Layout>,
    pub default_country: Option<String>,
    pub min_age: Option<u32>,
    pub phone_min_digits: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialSubmissionConfig {
    pub format: Option<OutputFormat>,
    pub output_dir: Option<String>,
    pub template: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes as null
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Result<Config> {
        let global_form = self.form.unwrap_or_default();
        let project_form = project.form.unwrap_or_default();
        let global_submission = self.submission.unwrap_or_default();
        let project_submission = project.submission.unwrap_or_default();

        let config = Config {
            form: FormConfig {
                // Project value > global value > default
                layout: project_form
                    .layout
                    .or(global_form.layout)
                    .unwrap_or_default(),
                default_country: project_form
                    .default_country
                    .or(global_form.default_country)
                    .map(|c| c.trim().to_string())
                    .unwrap_or_else(defaults::default_country),
                min_age: project_form
                    .min_age
                    .or(global_form.min_age)
                    .unwrap_or_else(defaults::default_min_age),
                phone_min_digits: project_form
                    .phone_min_digits
                    .or(global_form.phone_min_digits)
                    .unwrap_or_else(defaults::default_phone_min_digits),
            },
            submission: SubmissionConfig {
                format: project_submission
                    .format
                    .or(global_submission.format)
                    .unwrap_or_default(),
                output_dir: project_submission
                    .output_dir
                    .or(global_submission.output_dir),
                template: project_submission.template.or(global_submission.template),
            },
            // Countries config: project overrides global, or use default
            countries: project.countries.or(self.countries).unwrap_or_default(),
        };

        config.form.validate()?;
        Ok(config)
    }
}
