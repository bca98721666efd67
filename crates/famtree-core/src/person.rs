//! Person records: an open, schema-light field map keyed by a stable id.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

/// JSON key holding a record's identifier.
pub const ID_FIELD: &str = "id";

/// JSON key holding a record's display name.
pub const NAME_FIELD: &str = "name";

/// Field vocabulary offered by the edit form. Records may carry any subset
/// of these plus arbitrary extra keys; only `id` and `name` are enforced.
pub const PERSON_FIELDS: &[&str] = &[
    "gender",
    "first name",
    "last name",
    "avatar",
    "maiden",
    "birth year",
    "death year",
    "occupation",
    "location",
    "education",
    "nationality",
    "birth place",
    "death place",
    "marriage date",
    "email",
    "phone",
    "address",
    "notes",
];

#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotObject,
    #[error("record is missing a non-empty id")]
    MissingId,
}

/// One person in the tree. The id is held apart from the open field map
/// because the wire format strips it into the enclosing map key.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    id: String,
    fields: IndexMap<String, Value>,
}

impl PersonRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builds a record from the `id` map key plus its field object, as
    /// delivered by the wire format.
    pub fn from_fields(id: impl Into<String>, fields: IndexMap<String, Value>) -> Self {
        let mut record = Self {
            id: id.into(),
            fields,
        };
        // A stray id key inside the field object never shadows the real id.
        record.fields.shift_remove(ID_FIELD);
        record
    }

    /// Parses the flat JSON object form `{"id": "...", ...fields}`.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotObject)?;
        let id = obj
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(RecordError::MissingId)?;
        let mut fields = IndexMap::new();
        for (k, v) in obj {
            if k != ID_FIELD {
                fields.insert(k.clone(), v.clone());
            }
        }
        Ok(Self {
            id: id.to_string(),
            fields,
        })
    }

    /// Serializes to the flat JSON object form, id first.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(ID_FIELD.to_string(), Value::String(self.id.clone()));
        for (k, v) in &self.fields {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, when present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.fields
            .get(NAME_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if key != ID_FIELD {
            self.fields.insert(key, value);
        }
    }

    /// Shallow-merges `patch` onto this record: patched keys win,
    /// untouched keys are retained, the id is immutable.
    pub fn merge(&mut self, patch: &IndexMap<String, Value>) {
        for (k, v) in patch {
            if k != ID_FIELD {
                self.fields.insert(k.clone(), v.clone());
            }
        }
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> IndexMap<String, Value> {
        self.fields
    }
}
