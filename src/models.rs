//! Domain models for the CD collection. These stay plain data holders so the
//! store, persistence and console layers can pass them around without any of
//! them owning presentation or storage concerns.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single CD in the collection.
pub struct CdRecord {
    /// User-assigned identifier, limited to the `i64` range. Parsed at input
    /// time; uniqueness is not enforced, so two records may share an id.
    pub id: i64,
    /// Album title, stored as typed (already trimmed by the console layer).
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for CdRecord {
    /// Row format used by the inventory table: `ID<tab>Title (by:Artist)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

/// Ordered collection of records in insertion order. The in-memory value is
/// the source of truth for a session; the data file is only a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<CdRecord> {
        &mut self.records
    }
}

impl From<Vec<CdRecord>> for Inventory {
    fn from(records: Vec<CdRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a CdRecord;
    type IntoIter = std::slice::Iter<'a, CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
