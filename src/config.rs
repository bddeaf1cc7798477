//! Document configuration.
//!
//! The top-level YAML schema: metadata, page geometry, raw preamble
//! lines, the ordered list of content files, the abstract, and the
//! revision history. Loading fails fast on malformed YAML or missing
//! required fields; see [`ArtifactStore`](crate::ArtifactStore).

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Error;

/// Version shown on the title page when the revision history is empty.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Page margins, passed to the geometry package.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryOptions {
    /// Top margin, e.g. `2cm`.
    pub top: String,
    /// Bottom margin.
    pub bottom: String,
    /// Left margin.
    pub left: String,
    /// Right margin.
    pub right: String,
}

/// One entry of the revision history.
///
/// History is chronological; the last entry determines the version and
/// date shown on the title page.
#[derive(Debug, Clone, Deserialize)]
pub struct RevisionEntry {
    /// Version string, e.g. `1.2.0`.
    pub version: String,
    /// Revision date in `YYYY-MM-DD` form.
    pub date: String,
    /// Description lines. The first renders in the main table row,
    /// subsequent lines as continuation rows.
    pub description: Vec<String>,
}

impl RevisionEntry {
    /// The revision date reformatted for the title page, e.g.
    /// `February 01, 2024`.
    pub fn display_date(&self) -> Result<String, Error> {
        let parsed = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| Error::Date {
            date: self.date.clone(),
        })?;
        Ok(parsed.format("%B %d, %Y").to_string())
    }
}

/// An author, parsed from the `name|alias` convention.
///
/// The alias, when present, builds a contact identifier shown next to
/// the name on the title page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Optional alias used as the contact identifier.
    pub alias: Option<String>,
}

impl Author {
    /// Parse an author string. A `|` splits name from alias; both sides
    /// are trimmed.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('|') {
            Some((name, alias)) => Self {
                name: name.trim().to_string(),
                alias: Some(alias.trim().to_string()),
            },
            None => Self {
                name: raw.to_string(),
                alias: None,
            },
        }
    }

    /// The contact identifier: the alias, suffixed with `@domain` when a
    /// contact domain is configured. `None` without an alias.
    pub fn contact(&self, domain: Option<&str>) -> Option<String> {
        let alias = self.alias.as_deref()?;
        Some(match domain {
            Some(domain) => format!("{alias}@{domain}"),
            None => alias.to_string(),
        })
    }

    /// Title-page form: `\textit{name} (contact)` with an alias,
    /// `\textit{name}` without.
    pub fn format(&self, domain: Option<&str>) -> String {
        match self.contact(domain) {
            Some(contact) => format!("\\textit{{{}}} ({contact})", self.name),
            None => format!("\\textit{{{}}}", self.name),
        }
    }
}

/// Top-level document configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Document title.
    pub title: String,
    /// Authors, each optionally in `name|alias` form.
    pub author: Vec<String>,
    /// Affiliation line shown on the title page.
    pub affiliation: String,
    /// Contact domain appended to author aliases.
    pub email_domain: Option<String>,
    /// Output path without extension; `.tex` and `.pdf` are derived.
    pub output_file: String,
    /// Page margins.
    pub geometry_options: GeometryOptions,
    /// Raw preamble lines, inserted verbatim.
    pub preamble: Vec<String>,
    /// Ordered content file names, resolved against the artifact root.
    pub content: Vec<String>,
    /// Abstract text, normalized and set in italics.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Chronological revision history; may be empty.
    #[serde(default)]
    pub revision_history: Vec<RevisionEntry>,
}

impl DocumentConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Current version: the last revision entry, or
    /// [`DEFAULT_VERSION`] with an empty history.
    pub fn version(&self) -> &str {
        self.revision_history
            .last()
            .map(|rev| rev.version.as_str())
            .unwrap_or(DEFAULT_VERSION)
    }

    /// Current date for the title page: the last revision's display
    /// date, or the `\today` marker with an empty history.
    pub fn latest_date(&self) -> Result<String, Error> {
        match self.revision_history.last() {
            Some(rev) => rev.display_date(),
            None => Ok("\\today".to_string()),
        }
    }

    /// Parsed authors in configuration order.
    pub fn authors(&self) -> Vec<Author> {
        self.author.iter().map(|raw| Author::parse(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_history(history: &str) -> DocumentConfig {
        let yaml = format!(
            r#"
title: Test Document
author: ["Ada Lovelace|ada", "Charles Babbage"]
affiliation: Analytical Engines Ltd
email_domain: example.org
output_file: out/test
geometry_options: {{ top: 2cm, bottom: 2cm, left: 2.5cm, right: 2.5cm }}
preamble: ['\setlength{{\parindent}}{{0pt}}']
content: [intro.yaml]
abstract: A test document.
{history}
"#
        );
        DocumentConfig::from_yaml(&yaml).unwrap()
    }

    #[test]
    fn test_version_and_date_from_history() {
        let config = config_with_history(
            r#"revision_history:
  - { version: "1.0", date: "2024-01-01", description: [init] }
  - { version: "1.1", date: "2024-02-01", description: [fix a, fix b] }"#,
        );
        assert_eq!(config.version(), "1.1");
        assert_eq!(config.latest_date().unwrap(), "February 01, 2024");
    }

    #[test]
    fn test_empty_history_defaults() {
        let config = config_with_history("");
        assert_eq!(config.version(), DEFAULT_VERSION);
        assert_eq!(config.latest_date().unwrap(), "\\today");
    }

    #[test]
    fn test_invalid_date() {
        let entry = RevisionEntry {
            version: "1.0".into(),
            date: "01/02/2024".into(),
            description: vec![],
        };
        assert!(matches!(entry.display_date(), Err(Error::Date { .. })));
    }

    #[test]
    fn test_author_parsing() {
        let author = Author::parse("Ada Lovelace | ada");
        assert_eq!(author.name, "Ada Lovelace");
        assert_eq!(author.alias.as_deref(), Some("ada"));

        let plain = Author::parse("Charles Babbage");
        assert_eq!(plain.alias, None);
    }

    #[test]
    fn test_author_formatting() {
        let author = Author::parse("Ada|ada");
        assert_eq!(
            author.format(Some("example.org")),
            "\\textit{Ada} (ada@example.org)"
        );
        assert_eq!(author.format(None), "\\textit{Ada} (ada)");
        assert_eq!(Author::parse("Ada").format(Some("x")), "\\textit{Ada}");
    }

    #[test]
    fn test_missing_required_field_fails() {
        // No title: schema validation must reject at load time.
        let err = DocumentConfig::from_yaml("author: [a]\n");
        assert!(err.is_err());
    }
}
