//! Dataset decoding and the cleaning contract the chart core relies on.
//!
//! The core trusts that every record it receives carries finite numeric axis
//! fields. This module is the one place where raw JSON rows are coerced into
//! that shape; everything downstream works on [`Record`] values only.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::record::Record;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("failed to fetch dataset from `{location}`: {message}")]
    Fetch { location: String, message: String },

    #[error("failed to parse dataset json: {0}")]
    Parse(String),

    #[error("unexpected dataset shape: {0}")]
    UnexpectedShape(String),

    #[error("record #{index} is missing field `{field}`")]
    MissingField { index: usize, field: String },

    #[error("record #{index} field `{field}` is not numeric")]
    NonNumeric { index: usize, field: String },
}

/// Supplier of raw dataset text.
///
/// Fetching is synchronous; hosts with asynchronous transports hand the
/// finished payload to the chart through [`StaticDatasetSource`] or
/// `ScatterChart::load_json`.
pub trait DatasetSource {
    fn location(&self) -> String;

    fn fetch(&self) -> Result<String, LoadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDatasetSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|err| LoadError::Fetch {
            location: self.location(),
            message: err.to_string(),
        })
    }
}

/// In-memory payload, e.g. a response body already received by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDatasetSource {
    location: String,
    payload: String,
}

impl StaticDatasetSource {
    #[must_use]
    pub fn new(location: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            payload: payload.into(),
        }
    }
}

impl DatasetSource for StaticDatasetSource {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.payload.clone())
    }
}

/// A numeric field computed from another field once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DerivedField {
    Log10 { source: String, target: String },
}

impl DerivedField {
    #[must_use]
    pub fn log10(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Log10 {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Field names and coercions that turn raw rows into [`Record`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSpec {
    pub id_field: String,
    pub title_field: String,
    pub url_field: String,
    pub authors_field: String,
    pub numeric_fields: Vec<String>,
    #[serde(default)]
    pub derived_fields: Vec<DerivedField>,
}

impl CleaningSpec {
    /// Cleaning rules for the book sales dataset: numeric `pages` and
    /// `sales_rank`, plus a derived `log_sales_rank`.
    #[must_use]
    pub fn books() -> Self {
        Self {
            id_field: "ASIN".to_owned(),
            title_field: "title".to_owned(),
            url_field: "url".to_owned(),
            authors_field: "authors".to_owned(),
            numeric_fields: vec!["pages".to_owned(), "sales_rank".to_owned()],
            derived_fields: vec![DerivedField::log10("sales_rank", "log_sales_rank")],
        }
    }
}

impl Default for CleaningSpec {
    fn default() -> Self {
        Self::books()
    }
}

/// Parses a JSON array of raw rows and cleans each one.
pub fn parse_records(payload: &str, spec: &CleaningSpec) -> Result<Vec<Record>, LoadError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|err| LoadError::Parse(err.to_string()))?;
    let Value::Array(rows) = value else {
        return Err(LoadError::UnexpectedShape(
            "top-level value must be an array of records".to_owned(),
        ));
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Value::Object(row) = row else {
            return Err(LoadError::UnexpectedShape(format!(
                "record #{index} is not an object"
            )));
        };
        records.push(clean_record(index, row, spec)?);
    }
    debug!(count = records.len(), "parsed dataset records");
    Ok(records)
}

/// Fetches from `source` and parses the payload.
pub fn load_records(
    source: &dyn DatasetSource,
    spec: &CleaningSpec,
) -> Result<Vec<Record>, LoadError> {
    let payload = source.fetch().inspect_err(|err| {
        warn!(location = %source.location(), error = %err, "dataset fetch failed");
    })?;
    parse_records(&payload, spec)
}

fn clean_record(
    index: usize,
    row: &Map<String, Value>,
    spec: &CleaningSpec,
) -> Result<Record, LoadError> {
    let id = required_text(index, row, &spec.id_field)?;
    let title = required_text(index, row, &spec.title_field)?;
    let url = required_text(index, row, &spec.url_field)?;
    let authors = authors(index, row, &spec.authors_field)?;

    let mut record = Record::new(id, title, url).with_authors(authors);
    for field in &spec.numeric_fields {
        let value = coerce_numeric(index, row, field)?;
        record.fields.insert(field.clone(), value);
    }
    for derived in &spec.derived_fields {
        match derived {
            DerivedField::Log10 { source, target } => {
                let base = match record.field(source) {
                    Some(value) => value,
                    None => coerce_numeric(index, row, source)?,
                };
                let value = base.log10();
                if !value.is_finite() {
                    return Err(LoadError::NonNumeric {
                        index,
                        field: target.clone(),
                    });
                }
                record.fields.insert(target.clone(), value);
            }
        }
    }
    Ok(record)
}

fn required_text(
    index: usize,
    row: &Map<String, Value>,
    field: &str,
) -> Result<String, LoadError> {
    match row.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        _ => Err(LoadError::MissingField {
            index,
            field: field.to_owned(),
        }),
    }
}

fn authors(index: usize, row: &Map<String, Value>, field: &str) -> Result<Vec<String>, LoadError> {
    match row.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                _ => Err(LoadError::UnexpectedShape(format!(
                    "record #{index} field `{field}` must contain only strings"
                ))),
            })
            .collect(),
        Some(Value::String(name)) => Ok(vec![name.clone()]),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(_) => Err(LoadError::UnexpectedShape(format!(
            "record #{index} field `{field}` must be a list of names"
        ))),
    }
}

fn coerce_numeric(index: usize, row: &Map<String, Value>, field: &str) -> Result<f64, LoadError> {
    let value = match row.get(field) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
        None => {
            return Err(LoadError::MissingField {
                index,
                field: field.to_owned(),
            });
        }
    };
    match value {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::NonNumeric {
            index,
            field: field.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{CleaningSpec, LoadError, StaticDatasetSource, load_records, parse_records};

    #[test]
    fn books_spec_coerces_strings_and_derives_log_sales_rank() {
        let payload = r#"[
            {"ASIN": "X1", "title": "One", "url": "https://example.test/X1",
             "authors": ["A", "B"], "pages": "100", "sales_rank": 10},
            {"ASIN": "X2", "title": "Two", "url": "https://example.test/X2",
             "authors": ["C"], "pages": 400, "sales_rank": "1000"}
        ]"#;
        let records = parse_records(payload, &CleaningSpec::books()).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "X1");
        assert_eq!(records[0].authors, vec!["A", "B"]);
        assert_eq!(records[0].field("pages"), Some(100.0));
        assert_relative_eq!(records[0].field("log_sales_rank").expect("derived"), 1.0);
        assert_relative_eq!(records[1].field("log_sales_rank").expect("derived"), 3.0);
    }

    #[test]
    fn non_array_payload_is_unexpected_shape() {
        let err = parse_records(r#"{"ASIN": "X1"}"#, &CleaningSpec::books())
            .expect_err("object payload must fail");
        assert!(matches!(err, LoadError::UnexpectedShape(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_records("[{", &CleaningSpec::books()).expect_err("must fail");
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn non_numeric_axis_field_is_rejected() {
        let payload = r#"[{"ASIN": "X1", "title": "t", "url": "u", "authors": [],
                           "pages": "many", "sales_rank": 3}]"#;
        let err = parse_records(payload, &CleaningSpec::books()).expect_err("must fail");
        assert_eq!(
            err,
            LoadError::NonNumeric {
                index: 0,
                field: "pages".to_owned()
            }
        );
    }

    #[test]
    fn zero_sales_rank_cannot_derive_log() {
        let payload = r#"[{"ASIN": "X1", "title": "t", "url": "u", "authors": [],
                           "pages": 1, "sales_rank": 0}]"#;
        let err = parse_records(payload, &CleaningSpec::books()).expect_err("must fail");
        assert!(matches!(err, LoadError::NonNumeric { field, .. } if field == "log_sales_rank"));
    }

    #[test]
    fn missing_id_is_reported_with_index() {
        let payload = r#"[{"title": "t", "url": "u", "pages": 1, "sales_rank": 2}]"#;
        let err = parse_records(payload, &CleaningSpec::books()).expect_err("must fail");
        assert_eq!(
            err,
            LoadError::MissingField {
                index: 0,
                field: "ASIN".to_owned()
            }
        );
    }

    #[test]
    fn static_source_feeds_loader() {
        let source = StaticDatasetSource::new("memory", "[]");
        let records = load_records(&source, &CleaningSpec::books()).expect("load");
        assert!(records.is_empty());
    }
}
