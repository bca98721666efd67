//! Wire codec for the realtime backend.
//!
//! On the wire the tree lives under a single root key as a map from record
//! id to that record's fields, with the id itself stripped from the field
//! object. Internally the tree is an ordered array of flat records; this
//! module converts in both directions.

use famtree_core::{PersonRecord, SnapshotError, TreeSnapshot};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum WireError {
    #[error("wire root is not an object")]
    RootNotObject,
    #[error("wire entry {0} is not an object")]
    EntryNotObject(String),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Encodes a snapshot as the id-keyed wire map.
pub fn encode_records(snapshot: &TreeSnapshot) -> Value {
    let mut root = Map::new();
    for record in snapshot.iter() {
        let mut fields = Map::new();
        for (k, v) in record.fields() {
            fields.insert(k.clone(), v.clone());
        }
        root.insert(record.id().to_string(), Value::Object(fields));
    }
    Value::Object(root)
}

/// Decodes the id-keyed wire map back into a snapshot, reconstituting
/// each id from its map key. `Null` stands for an absent root key and
/// decodes to the empty snapshot.
pub fn decode_records(value: &Value) -> Result<TreeSnapshot, WireError> {
    if value.is_null() {
        return Ok(TreeSnapshot::new());
    }
    let root = value.as_object().ok_or(WireError::RootNotObject)?;
    let mut records = Vec::with_capacity(root.len());
    for (id, entry) in root {
        let fields = entry
            .as_object()
            .ok_or_else(|| WireError::EntryNotObject(id.clone()))?;
        let fields = fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        records.push(PersonRecord::from_fields(id.clone(), fields));
    }
    Ok(TreeSnapshot::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_root_is_the_empty_snapshot() {
        let snapshot = decode_records(&Value::Null).expect("decodes");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn id_moves_between_key_and_field() {
        let snapshot = TreeSnapshot::from_value(&json!([
            {"id": "p1", "name": "Ann", "birth year": 1970},
        ]))
        .expect("valid snapshot");

        let wire = encode_records(&snapshot);
        assert_eq!(wire, json!({"p1": {"name": "Ann", "birth year": 1970}}));

        let decoded = decode_records(&wire).expect("decodes");
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn rejects_non_object_shapes() {
        assert!(matches!(
            decode_records(&json!([1, 2])),
            Err(WireError::RootNotObject)
        ));
        assert!(matches!(
            decode_records(&json!({"p1": 7})),
            Err(WireError::EntryNotObject(id)) if id == "p1"
        ));
    }
}
