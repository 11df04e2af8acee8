use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::errors::ExportError;

/// Renders `records` as CSV text.
///
/// The header row comes from `headers` when supplied, otherwise from the
/// key set of the first record. A field is quoted (with embedded quotes
/// doubled) when it contains a comma or a quote character; an absent field
/// renders as the empty string, never as a null literal.
///
/// An empty input is refused with [`ExportError::NothingToExport`] so the
/// caller can surface a notice instead of producing an empty file.
pub fn export_records<T: Serialize>(
    records: &[T],
    headers: Option<&[&str]>,
) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let rows = records
        .iter()
        .map(|record| serde_json::to_value(record))
        .collect::<Result<Vec<Value>, _>>()
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    let header_row: Vec<String> = match headers {
        Some(headers) => headers.iter().map(|h| h.to_string()).collect(),
        None => match &rows[0] {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => {
                return Err(ExportError::Serialization(
                    "records must serialize to objects".to_string(),
                ))
            }
        },
    };

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(&header_row)
        .map_err(|e| ExportError::Write(e.to_string()))?;

    for row in &rows {
        let fields: Vec<String> = header_row
            .iter()
            .map(|header| field_text(row.get(header)))
            .collect();
        writer
            .write_record(&fields)
            .map_err(|e| ExportError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Write(e.to_string()))
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
