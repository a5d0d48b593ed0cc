//! Static country reference data used by the nationality and residence pickers.
//!
//! The built-in list is embedded at compile time. A project can replace it
//! with its own YAML file through `countries.path` in the config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_COUNTRIES: &str = include_str!("data/countries.yaml");

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, stored as the field value.
    pub code: String,
    /// Common display name.
    pub name: String,
    /// International dialing prefix, e.g. `+44`.
    #[serde(default)]
    pub dial: Option<String>,
}

/// A `{value, label}` pair for option pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryList {
    countries: Vec<Country>,
}

impl CountryList {
    /// The embedded list.
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_COUNTRIES) {
            Ok(list) => list,
            Err(e) => {
                eprintln!("Warning: Failed to parse built-in country list: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read country list from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse country list {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut countries: Vec<Country> =
            serde_yaml::from_str(content).context("Country list must be a YAML sequence")?;

        for country in &mut countries {
            country.code = country.code.trim().to_ascii_uppercase();
            if country.code.is_empty() {
                anyhow::bail!("Country '{}' has an empty code", country.name);
            }
        }

        Ok(Self { countries })
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Look up a country by code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Turn a picker choice (code or display name) into a country.
    /// Unknown input resolves to `None`, i.e. no selection.
    pub fn resolve(&self, choice: &str) -> Option<&Country> {
        let choice = choice.trim();
        if choice.is_empty() {
            return None;
        }
        self.get(choice).or_else(|| {
            let lowered = choice.to_lowercase();
            self.countries
                .iter()
                .find(|c| c.name.to_lowercase() == lowered)
        })
    }

    /// Countries matching `query`, ignoring case: an exact code match first,
    /// then every name containing the query.
    pub fn search(&self, query: &str) -> Vec<&Country> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.countries.iter().collect();
        }

        let by_code = self.get(&query);
        by_code
            .into_iter()
            .chain(self.countries.iter().filter(|c| {
                Some(*c) != by_code && c.name.to_lowercase().contains(&query)
            }))
            .collect()
    }

    /// Options for a picker: the code is the value, the name the label.
    pub fn options(&self) -> Vec<SelectOption> {
        self.countries
            .iter()
            .map(|c| SelectOption {
                value: c.code.clone(),
                label: c.name.clone(),
            })
            .collect()
    }

    /// Display name for a stored code, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map(|c| c.name.as_str()).unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_list_loads() {
        let list = CountryList::builtin();
        assert_eq!(list.len(), 250);
        assert_eq!(list.get("us").unwrap().name, "United States");
        // Codes that YAML 1.1 would read as booleans stay strings
        assert_eq!(list.get("NO").unwrap().name, "Norway");
    }

    #[test]
    fn test_builtin_codes_are_unique() {
        let list = CountryList::builtin();
        let mut codes: Vec<_> = list.iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), list.len());
    }

    #[test]
    fn test_resolve_by_code_or_name() {
        let list = CountryList::builtin();
        assert_eq!(list.resolve("gb").unwrap().code, "GB");
        assert_eq!(list.resolve("united kingdom").unwrap().code, "GB");
        assert!(list.resolve("Atlantis").is_none());
        assert!(list.resolve("  ").is_none());
    }

    #[test]
    fn test_search() {
        let list = CountryList::builtin();
        let names: Vec<_> = list.search("guinea").iter().map(|c| c.code.clone()).collect();
        assert!(names.contains(&"GN".to_string()));
        assert!(names.contains(&"PG".to_string()));
        assert_eq!(list.search("").len(), list.len());
        assert_eq!(list.search("de")[0].code, "DE");
    }

    #[test]
    fn test_options_use_code_as_value() {
        let list = CountryList::parse(r#"- { code: "fr", name: "France" }"#).unwrap();
        assert_eq!(
            list.options(),
            vec![SelectOption {
                value: "FR".to_string(),
                label: "France".to_string()
            }]
        );
        assert_eq!(list.display_name("FR"), "France");
        assert_eq!(list.display_name("ZZ"), "ZZ");
    }

    #[test]
    fn test_parse_rejects_empty_code() {
        assert!(CountryList::parse(r#"- { code: " ", name: "Nowhere" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- code: \"IS\"\n  name: Iceland\n  dial: \"+354\"").unwrap();
        let list = CountryList::load_from(file.path()).unwrap();
        assert_eq!(list.get("is").unwrap().dial.as_deref(), Some("+354"));
    }
}
