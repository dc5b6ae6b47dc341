//! Row/field writer and the string escaping algorithm

use crate::common::Quote;
use crate::config::CsvConfiguration;
use crate::number::CsvNumber;
use log::trace;
use serde_json::Value;
use std::fmt;

/// Capability to build CSV content field by field, row by row.
///
/// Every field is followed by the column separator; `newline` drops the
/// separator left by the last field of the row before adding the line
/// separator.
pub trait CsvWriter {
    /// Appends a string field, escaping it if `escape` is true.
    /// `None` and `""` both produce an empty field.
    fn append_str<'v>(&mut self, value: impl Into<Option<&'v str>>, escape: bool) -> &mut Self;

    /// Appends a string field using the configured default escaping
    fn append<'v>(&mut self, value: impl Into<Option<&'v str>>) -> &mut Self;

    /// Appends a number field. Numbers are never escaped.
    fn append_number<N: CsvNumber>(&mut self, value: N) -> &mut Self;

    /// Appends a null field
    fn append_empty(&mut self) -> &mut Self {
        self.append(None::<&str>)
    }

    /// Ends the current row
    fn newline(&mut self) -> &mut Self;

    /// Appends a JSON scalar as a field.
    ///
    /// Strings follow the default escaping, numbers the number path, booleans
    /// are written unescaped and null is an empty field. Arrays and objects are
    /// written as compact JSON text on the string path.
    fn append_value(&mut self, value: &Value) -> &mut Self {
        match value {
            Value::Null => self.append_empty(),
            Value::Bool(b) => self.append_str(if *b { "true" } else { "false" }, false),
            Value::Number(n) => self.append_number(n),
            Value::String(s) => self.append(s.as_str()),
            nested => self.append(nested.to_string().as_str()),
        }
    }
}

/// Quote `value` with `quote`, doubling every embedded quote character
pub fn escape(value: &str, quote: Quote) -> String {
    let q = quote.as_char();
    let mut result = String::with_capacity(value.len() + 2);
    result.push(q);

    for c in value.chars() {
        if c == q {
            result.push(q);
        }
        result.push(c);
    }

    result.push(q);
    result
}

/// In-memory CSV writer.
///
/// ```rust
/// use csv_builder_rs::{CsvConfiguration, CsvStringWriter, CsvWriter};
///
/// let conf = CsvConfiguration::rfc4180();
/// let mut writer = CsvStringWriter::new(&conf);
/// writer.append("a").append("b").newline().append("c");
/// assert_eq!(writer.content(), "\"a\",\"b\"\r\n\"c\"");
/// ```
#[derive(Debug, Clone)]
pub struct CsvStringWriter<'a> {
    configuration: &'a CsvConfiguration,
    content: String,
}

impl<'a> CsvStringWriter<'a> {
    pub fn new(configuration: &'a CsvConfiguration) -> Self {
        Self {
            configuration,
            content: String::new(),
        }
    }

    pub fn configuration(&self) -> &'a CsvConfiguration {
        self.configuration
    }

    /// Returns true if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the CSV content.
    ///
    /// The trailing column separator of the last row is dropped and leading
    /// and trailing whitespace is trimmed. The buffer itself is left untouched,
    /// so repeated calls return the same text.
    pub fn content(&self) -> String {
        let content = self.finalized();
        trace!("rendered {} bytes of CSV content", content.len());
        content.to_string()
    }

    /// Consumes the writer, returning the same text as [`content`](Self::content)
    pub fn into_content(self) -> String {
        self.content()
    }

    fn finalized(&self) -> &str {
        let separator = self.configuration.column_separator();
        self.content
            .strip_suffix(separator)
            .unwrap_or(&self.content)
            .trim()
    }

    fn remove_trailing_column_separator(&mut self) {
        if self.content.ends_with(self.configuration.column_separator()) {
            self.content.pop();
        }
    }
}

impl CsvWriter for CsvStringWriter<'_> {
    fn append_str<'v>(&mut self, value: impl Into<Option<&'v str>>, escape_value: bool) -> &mut Self {
        match value.into() {
            Some(v) if !v.is_empty() && escape_value => {
                self.content.push_str(&escape(v, self.configuration.quote()))
            }
            Some(v) => self.content.push_str(v),
            None => {}
        }
        self.content.push(self.configuration.column_separator());
        self
    }

    fn append<'v>(&mut self, value: impl Into<Option<&'v str>>) -> &mut Self {
        self.append_str(value, self.configuration.escape_strings())
    }

    fn append_number<N: CsvNumber>(&mut self, value: N) -> &mut Self {
        let field = value.to_field();
        self.append_str(field.as_deref(), false)
    }

    fn newline(&mut self) -> &mut Self {
        self.remove_trailing_column_separator();
        self.content.push_str(self.configuration.line_separator());
        self
    }
}

impl fmt::Display for CsvStringWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.finalized())
    }
}
