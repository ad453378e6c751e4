//! Records flowing out of the model and back to the caller

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely typed record as returned by the model, before validation
pub type CandidateRecord = Map<String, Value>;

/// Validated record: every key was requested and every value has its declared kind
pub type Record = Map<String, Value>;

/// Ordered sequence of validated records
///
/// The n-th record corresponds to the n-th candidate the model produced.
/// Records are never merged, reordered or deduplicated; a record whose
/// fields were all dropped is kept as an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    records: Vec<Record>,
}

impl ExtractionResult {
    /// Wrap already-validated records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Borrow the records in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the model produced no records at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl IntoIterator for ExtractionResult {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
