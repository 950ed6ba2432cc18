use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Defaults compiled into the binary; checked by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
    pub typst: TypstConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Class attribute of `<p>`; omitted when empty.
    pub paragraph_class: String,
    /// Class attribute of `<ul>`; omitted when empty.
    pub list_class: String,
    /// Escape `&`, `<` and `>` in span text. Turn off only for a trusted surface.
    pub escape_text: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            paragraph_class: "mb-1".to_string(),
            list_class: "list-disc ml-5 space-y-1".to_string(),
            escape_text: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TypstConfig {
    pub paper: String,
    pub margin: String,
    pub font_size: String,
    /// Vertical space emitted for each blank description line.
    pub blank_line_spacing: String,
    pub keep_together_max_items: usize,
}

impl Default for TypstConfig {
    fn default() -> Self {
        Self {
            paper: "a4".to_string(),
            margin: "2cm".to_string(),
            font_size: "11pt".to_string(),
            blank_line_spacing: "0.6em".to_string(),
            keep_together_max_items: 5,
        }
    }
}

impl Config {
    /// The configuration shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys missing from the file keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return defaults if missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "using compiled default config");
                Self::compiled_default()
            }
        }
    }
}
