//! CSV configuration, its builder and the named presets

use crate::common::Quote;
use crate::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Immutable set of formatting options consumed by a writer.
///
/// Defaults follow RFC 4180: comma column separator, CRLF line separator,
/// strings escaped by default using double quotes.
///
/// No validation is performed. Choosing the quote character as column
/// separator produces ambiguous output and is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfiguration {
    column_separator: char,
    line_separator: String,
    escape_strings: bool,
    double_quotes: bool,
}

impl Default for CsvConfiguration {
    fn default() -> Self {
        Self {
            column_separator: ',',
            line_separator: "\r\n".to_string(),
            escape_strings: true,
            double_quotes: true,
        }
    }
}

impl CsvConfiguration {
    /// Starts a builder pre-filled with the RFC 4180 defaults
    pub fn builder() -> CsvConfigurationBuilder {
        CsvConfigurationBuilder::new()
    }

    pub fn column_separator(&self) -> char {
        self.column_separator
    }

    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// Returns true if strings are escaped when no explicit flag is given
    pub fn escape_strings(&self) -> bool {
        self.escape_strings
    }

    /// Returns true for double quotes, false for single quotes
    pub fn double_quotes(&self) -> bool {
        self.double_quotes
    }

    /// Returns the quote character used when escaping
    pub fn quote(&self) -> Quote {
        Quote::from_double_quotes(self.double_quotes)
    }

    /// RFC 4180 configuration
    pub fn rfc4180() -> Self {
        CsvConfigurationBuilder::new().build()
    }

    /// RFC 4180 configuration that does not escape strings by default
    pub fn rfc4180_no_escape() -> Self {
        CsvConfigurationBuilder::new().escape_strings(false).build()
    }

    /// RFC 4180 configuration using semicolons as column separator
    pub fn using_semicolon() -> Self {
        CsvConfigurationBuilder::new().column_separator(';').build()
    }

    /// RFC 4180 configuration using semicolons and LF line endings
    pub fn using_semicolon_and_lf() -> Self {
        CsvConfigurationBuilder::new()
            .column_separator(';')
            .line_separator("\n")
            .build()
    }

    /// Load a configuration from a JSON document.
    ///
    /// Missing fields fall back to the RFC 4180 defaults:
    ///
    /// ```rust
    /// use csv_builder_rs::CsvConfiguration;
    ///
    /// let conf = CsvConfiguration::from_json(r#"{"column_separator": ";"}"#).unwrap();
    /// assert_eq!(conf.column_separator(), ';');
    /// assert_eq!(conf.line_separator(), "\r\n");
    /// ```
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let configuration: CsvConfiguration = serde_json::from_str(input)?;
        debug!("loaded CSV configuration {:?}", configuration);
        Ok(configuration)
    }
}

/// Mutable draft of a [`CsvConfiguration`]
#[derive(Debug, Clone)]
pub struct CsvConfigurationBuilder {
    draft: CsvConfiguration,
}

impl Default for CsvConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            draft: CsvConfiguration::default(),
        }
    }

    pub fn column_separator(mut self, separator: char) -> Self {
        self.draft.column_separator = separator;
        self
    }

    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.draft.line_separator = separator.into();
        self
    }

    /// Escape strings by default
    pub fn escape_strings(mut self, escape: bool) -> Self {
        self.draft.escape_strings = escape;
        self
    }

    pub fn use_double_quotes(mut self) -> Self {
        self.draft.double_quotes = true;
        self
    }

    pub fn use_single_quotes(mut self) -> Self {
        self.draft.double_quotes = false;
        self
    }

    /// Snapshot the draft; the builder can keep producing configurations
    pub fn build(&self) -> CsvConfiguration {
        self.draft.clone()
    }
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Rfc4180,
    Rfc4180NoEscape,
    Semicolon,
    SemicolonLf,
}

impl Preset {
    /// Returns the registered name of the preset
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Rfc4180 => "rfc4180",
            Preset::Rfc4180NoEscape => "rfc4180-no-escape",
            Preset::Semicolon => "semicolon",
            Preset::SemicolonLf => "semicolon-lf",
        }
    }

    pub fn configuration(&self) -> CsvConfiguration {
        match self {
            Preset::Rfc4180 => CsvConfiguration::rfc4180(),
            Preset::Rfc4180NoEscape => CsvConfiguration::rfc4180_no_escape(),
            Preset::Semicolon => CsvConfiguration::using_semicolon(),
            Preset::SemicolonLf => CsvConfiguration::using_semicolon_and_lf(),
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let preset = match normalized.as_str() {
            "rfc4180" => Preset::Rfc4180,
            "rfc4180-no-escape" => Preset::Rfc4180NoEscape,
            "semicolon" => Preset::Semicolon,
            "semicolon-lf" => Preset::SemicolonLf,
            _ => return Err(ConfigError::UnknownPreset(s.to_string())),
        };
        debug!("resolved CSV preset {}", preset.name());
        Ok(preset)
    }
}
