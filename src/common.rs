//! Common types shared between the configuration and the writer

use serde::{Deserialize, Serialize};

/// Quote character used to escape string fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    /// Returns the character representation
    pub fn as_char(&self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    pub(crate) fn from_double_quotes(double_quotes: bool) -> Self {
        if double_quotes {
            Quote::Double
        } else {
            Quote::Single
        }
    }
}
