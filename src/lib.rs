//! # csv_builder_rs
//!
//! A small in-memory CSV content builder.
//!
//! Values (strings, numbers, nulls) are appended field by field into rows and
//! serialized into a single text buffer, using configurable column separators,
//! line separators and quoting rules. Defaults follow RFC 4180.
//!
//! ## Example
//!
//! ```rust
//! use csv_builder_rs::{CsvConfiguration, CsvStringWriter, CsvWriter};
//!
//! let conf = CsvConfiguration::builder()
//!     .column_separator(';')
//!     .line_separator("\n")
//!     .use_single_quotes()
//!     .build();
//!
//! let mut writer = CsvStringWriter::new(&conf);
//! writer
//!     .append("it's")
//!     .append_number(3.14)
//!     .append_empty()
//!     .newline()
//!     .append_str("raw", false);
//!
//! assert_eq!(writer.content(), "'it''s';3.14;\nraw");
//! ```

mod common;
mod config;
mod encoder;
mod error;
mod number;
mod writer;

// Re-export public API
pub use common::Quote;
pub use config::{CsvConfiguration, CsvConfigurationBuilder, Preset};
pub use encoder::encode;
pub use error::ConfigError;
pub use number::CsvNumber;
pub use writer::{escape, CsvStringWriter, CsvWriter};
