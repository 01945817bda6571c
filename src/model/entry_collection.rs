use serde::{Deserialize, Serialize};

use crate::UsageRecord;

/// Ordered usage records, oldest action first. Serialized as a bare JSON array.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    records: Vec<UsageRecord>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new collection with `record` at the end. `self` is left untouched.
    pub fn appended(&self, record: UsageRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(record);
        Self { records }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[UsageRecord] {
        &self.records
    }
}

impl From<Vec<UsageRecord>> for EntryCollection {
    fn from(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<UsageRecord> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = UsageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a UsageRecord;
    type IntoIter = std::slice::Iter<'a, UsageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
