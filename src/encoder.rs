//! JSON rows to CSV encoder

use crate::config::CsvConfiguration;
use crate::writer::{CsvStringWriter, CsvWriter};
use serde_json::Value;

/// Encode JSON rows to CSV content.
///
/// An array of arrays yields one row per inner array and an array of objects
/// one row per object, values in key order. Any other element is written as
/// a single-field row, and a non-array root as a single field.
pub fn encode(rows: &Value, configuration: &CsvConfiguration) -> String {
    let mut writer = CsvStringWriter::new(configuration);

    match rows {
        Value::Array(rows) => {
            for row in rows {
                encode_row(&mut writer, row);
                writer.newline();
            }
        }
        scalar => {
            writer.append_value(scalar);
        }
    }

    writer.into_content()
}

fn encode_row(writer: &mut CsvStringWriter<'_>, row: &Value) {
    match row {
        Value::Array(fields) => {
            for field in fields {
                writer.append_value(field);
            }
        }
        Value::Object(fields) => {
            for field in fields.values() {
                writer.append_value(field);
            }
        }
        field => {
            writer.append_value(field);
        }
    }
}
