//! Loading résumé records.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::Error as _;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::ResumeRecord;

/// Load a record from a JSON file.
///
/// A missing or unreadable file is [`Error::Read`]; malformed JSON is
/// [`Error::Json`].
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    load_str(&data)
}

/// Load a record from a JSON string.
pub fn load_str(data: &str) -> Result<ResumeRecord> {
    from_document(serde_json::from_str(data)?)
}

/// Load a record from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<ResumeRecord> {
    from_document(serde_json::from_reader(reader)?)
}

/// The document root must be a JSON object; arrays and scalars are rejected.
fn from_document(document: Value) -> Result<ResumeRecord> {
    match document {
        document @ Value::Object(_) => Ok(serde_json::from_value(document)?),
        other => Err(Error::Json(serde_json::Error::custom(format!(
            "expected a JSON object at the top level, found {}",
            kind(&other)
        )))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
