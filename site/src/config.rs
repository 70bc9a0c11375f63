//! Document-level configuration: language, `<head>` metadata and footer year.
//!
//! Every field is optional in TOML; missing values fall back to the product
//! defaults below.
//!
//! ```rust
//! use antimatter_site::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(r#"
//!     copyright_year = 2030
//!     [meta]
//!     title = "Antimatter AI — Launch"
//! "#).unwrap();
//!
//! assert_eq!(config.meta.title, "Antimatter AI — Launch");
//! assert_eq!(config.lang, "en");
//! ```

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Footer year used when neither the config nor the caller supplies one.
pub const DEFAULT_COPYRIGHT_YEAR: i32 = 2025;

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `<html lang>` value
    pub lang: String,
    /// Head metadata
    pub meta: SiteMeta,
    /// Year printed in the footer copyright line
    pub copyright_year: Option<i32>,
}

/// `<head>` metadata: title, description, keywords and Open Graph tags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Document title
    pub title: String,
    /// `<meta name="description">`
    pub description: String,
    /// `<meta name="keywords">`, joined with `", "`
    pub keywords: Vec<String>,
    /// Open Graph block
    pub open_graph: OpenGraph,
}

/// Open Graph properties (`og:title`, `og:description`, `og:type`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    /// `og:title`
    pub title: String,
    /// `og:description`
    pub description: String,
    /// `og:type`
    pub kind: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            meta: SiteMeta::default(),
            copyright_year: None,
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Antimatter AI — Next-Generation AI Platform".into(),
            description: "Antimatter AI delivers cutting-edge artificial intelligence solutions \
                          that transform how businesses operate, create, and grow."
                .into(),
            keywords: vec![
                "AI".into(),
                "artificial intelligence".into(),
                "machine learning".into(),
                "Antimatter AI".into(),
            ],
            open_graph: OpenGraph::default(),
        }
    }
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            title: "Antimatter AI — Next-Generation AI Platform".into(),
            description: "Cutting-edge AI solutions that transform businesses.".into(),
            kind: "website".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| SiteError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Footer year, falling back to [`DEFAULT_COPYRIGHT_YEAR`].
    pub fn year(&self) -> i32 {
        self.copyright_year.unwrap_or(DEFAULT_COPYRIGHT_YEAR)
    }

    /// Keywords joined for the `<meta name="keywords">` tag.
    pub fn keywords_content(&self) -> String {
        self.meta.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.year(), DEFAULT_COPYRIGHT_YEAR);
    }

    #[test]
    fn partial_open_graph_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [meta.open_graph]
            kind = "article"
            "#,
        )
        .unwrap();

        assert_eq!(config.meta.open_graph.kind, "article");
        assert_eq!(
            config.meta.open_graph.description,
            "Cutting-edge AI solutions that transform businesses."
        );
        assert_eq!(config.meta.title, SiteMeta::default().title);
    }

    #[test]
    fn keywords_are_comma_joined() {
        let config = SiteConfig::default();
        assert_eq!(
            config.keywords_content(),
            "AI, artificial intelligence, machine learning, Antimatter AI"
        );
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lang = \"pl\"\ncopyright_year = 2027").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.lang, "pl");
        assert_eq!(config.year(), 2027);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SiteError::ReadConfig { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "copyright_year = \"next year\"").unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::ParseConfig { .. }));
    }
}
