//! Tree snapshots: the full ordered set of person records at one point
//! in time. Ordering is insertion order and carries no semantic meaning;
//! relationships live inside each record's fields.

use crate::person::{PersonRecord, RecordError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    #[error("snapshot is not a JSON array")]
    NotArray,
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Invariant: record ids are unique within a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeSnapshot {
    records: Vec<PersonRecord>,
}

impl TreeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self, SnapshotError> {
        let mut snapshot = Self::new();
        for record in records {
            snapshot.push(record)?;
        }
        Ok(snapshot)
    }

    /// Parses a JSON array of flat record objects.
    pub fn from_value(value: &Value) -> Result<Self, SnapshotError> {
        let items = value.as_array().ok_or(SnapshotError::NotArray)?;
        let mut snapshot = Self::new();
        for item in items {
            snapshot.push(PersonRecord::from_value(item)?)?;
        }
        Ok(snapshot)
    }

    /// Serializes to a JSON array of flat record objects.
    pub fn to_value(&self) -> Value {
        Value::Array(self.records.iter().map(PersonRecord::to_value).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&PersonRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PersonRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Appends a record, rejecting id collisions.
    pub fn push(&mut self, record: PersonRecord) -> Result<(), SnapshotError> {
        if self.contains(record.id()) {
            return Err(SnapshotError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes the record with the given id, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<PersonRecord> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(PersonRecord::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_rejects_duplicate_ids() {
        let value = json!([
            {"id": "p1", "name": "Ann"},
            {"id": "p1", "name": "Bo"},
        ]);
        assert!(matches!(
            TreeSnapshot::from_value(&value),
            Err(SnapshotError::DuplicateId(id)) if id == "p1"
        ));
    }

    #[test]
    fn preserves_insertion_order() {
        let value = json!([
            {"id": "b", "name": "Bo"},
            {"id": "a", "name": "Ann"},
        ]);
        let snapshot = TreeSnapshot::from_value(&value).expect("valid snapshot");
        let ids: Vec<&str> = snapshot.ids().collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(snapshot.to_value(), value);
    }

    #[test]
    fn remove_returns_the_record() {
        let value = json!([{"id": "a", "name": "Ann"}]);
        let mut snapshot = TreeSnapshot::from_value(&value).expect("valid snapshot");
        let removed = snapshot.remove("a").expect("present");
        assert_eq!(removed.id(), "a");
        assert!(snapshot.is_empty());
        assert!(snapshot.remove("a").is_none());
    }
}
