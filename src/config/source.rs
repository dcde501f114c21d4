//! Word-source configuration module.
//!
//! Describes where the dictionary's word list lives and how it is split and
//! folded.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Encoding of the word-source file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Plain text, words separated by `separator`
    #[default]
    Text,
    /// A JSON array of words
    Json,
}

/// Word-source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Path to the word list, optionally gzip-compressed
    pub path: Option<PathBuf>,

    /// Literal string separating words in text sources
    pub separator: String,

    /// Whether lookups distinguish upper and lower case
    pub case_sensitive: bool,

    /// Encoding of the word list
    pub format: SourceFormat,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            separator: crate::dictionary::source::DEFAULT_SEPARATOR.to_string(),
            case_sensitive: false,
            format: SourceFormat::Text,
        }
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "separator must not be empty".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "path must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for [`SourceConfig`].
///
/// Every field left unset keeps the value from the lower configuration layers.
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct SourceOverrides {
    /// Path to the word list (overrides `source.path`)
    #[clap(short, long, value_parser)]
    pub source: Option<PathBuf>,

    /// Literal word separator (overrides `source.separator`)
    #[clap(long)]
    pub separator: Option<String>,

    /// Distinguish upper and lower case (overrides `source.case_sensitive`)
    #[clap(long, value_name = "BOOL")]
    pub case_sensitive: Option<bool>,

    /// Word list encoding (overrides `source.format`)
    #[clap(long, value_enum)]
    pub format: Option<SourceFormat>,
}

impl SourceOverrides {
    /// Replaces the values of `config` that were given on the command line.
    pub fn apply(&self, config: &mut SourceConfig) {
        if let Some(path) = &self.source {
            config.path = Some(path.clone());
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(case_sensitive) = self.case_sensitive {
            config.case_sensitive = case_sensitive;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}
