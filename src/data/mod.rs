// Data module for job records and their sources
// Author: Gabriel Demetrios Lafis

mod csv;

pub use self::csv::*;

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::utils::{InsightsError, InsightsResult};

/// One input row, mapping field names to raw string values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record::default()
    }

    /// Get a field value if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field value, failing with `MissingField` when absent
    pub fn require(&self, field: &str) -> InsightsResult<&str> {
        self.get(field).ok_or_else(|| InsightsError::MissingField {
            field: field.to_string(),
        })
    }

    /// Set a field value, returning the previous one
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Check whether the record carries a field
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, value)` pairs in no particular order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered, immutable set of records loaded from one file.
///
/// Cloning is cheap: clones share the same underlying rows.
#[derive(Debug, Clone)]
pub struct RecordSet {
    inner: Arc<RecordSetInner>,
}

#[derive(Debug)]
struct RecordSetInner {
    source: String,
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set from its header and rows
    pub fn new(
        source: impl Into<String>,
        headers: Vec<String>,
        records: Vec<Record>,
    ) -> Self {
        RecordSet {
            inner: Arc::new(RecordSetInner {
                source: source.into(),
                headers,
                records,
            }),
        }
    }

    /// Path string the set was loaded from
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// Field names in file order
    pub fn headers(&self) -> &[String] {
        &self.inner.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.inner.records
    }

    /// True when both handles share the same loaded rows
    pub fn ptr_eq(&self, other: &RecordSet) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for RecordSet {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.inner.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.records.iter()
    }
}
