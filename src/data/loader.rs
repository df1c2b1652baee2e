//! Loading bank records from the data file.
//!
//! Every call reads the file again. There is no cache: the operator may edit
//! the file while the service runs and the next request sees the change.

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::record::BankRecord;

/// Errors that can occur while loading the data file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is valid but the top level is not an array.
    #[error("expected a JSON array of bank records in {}, found {found}", .path.display())]
    NotASequence { path: PathBuf, found: &'static str },
}

/// Reads bank records from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the file, preserving record order.
    pub async fn load(&self) -> Result<Vec<BankRecord>, DataLoadError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataLoadError::Read {
                path: self.path.clone(),
                source,
            })?;

        let records = parse_records(&content).map_err(|e| match e {
            ParseFailure::Json(source) => DataLoadError::Parse {
                path: self.path.clone(),
                source,
            },
            ParseFailure::Shape(found) => DataLoadError::NotASequence {
                path: self.path.clone(),
                found,
            },
        })?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Data file loaded"
        );

        Ok(records)
    }
}

enum ParseFailure {
    Json(serde_json::Error),
    Shape(&'static str),
}

fn parse_records(content: &str) -> Result<Vec<BankRecord>, ParseFailure> {
    match serde_json::from_str::<Value>(content).map_err(ParseFailure::Json)? {
        Value::Array(items) => Ok(items.into_iter().map(BankRecord::from_value).collect()),
        other => Err(ParseFailure::Shape(json_type_name(&other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
