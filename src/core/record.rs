use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One cleaned dataset row.
///
/// Numeric fields (raw and derived) live in `fields`; the record is never
/// mutated after the loader hands it to the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub url: String,
    pub fields: IndexMap<String, f64>,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            url: url.into(),
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    /// Reads a numeric field, failing when it is absent or non-finite.
    pub fn require_field(&self, name: &str) -> ChartResult<f64> {
        match self.field(name) {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(ChartError::MissingField {
                record_id: self.id.clone(),
                field: name.to_owned(),
            }),
        }
    }
}

/// Which record field drives an axis, and how the axis is labeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelector {
    pub field: String,
    pub label: String,
}

impl AxisSelector {
    #[must_use]
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }
}

/// Loaded record collection keyed by record id.
///
/// Insertion order is preserved so marks are drawn in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: IndexMap<String, Record>,
}

impl RecordSet {
    /// Builds a collection, rejecting duplicate ids.
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        let mut by_id = IndexMap::with_capacity(records.len());
        for record in records {
            if by_id.contains_key(&record.id) {
                return Err(ChartError::DuplicateRecordId(record.id));
            }
            by_id.insert(record.id.clone(), record);
        }
        Ok(Self { records: by_id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}
