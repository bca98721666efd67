//! Search over the current record list. Stateless: a case-insensitive
//! substring match against each person's display name.

use famtree_core::{PersonRecord, TreeSnapshot};

/// Display name for a record: the `name` field, or `first name` and
/// `last name` joined, whichever is available.
pub fn display_name(record: &PersonRecord) -> Option<String> {
    if let Some(name) = record.name() {
        return Some(name.to_string());
    }
    let first = record.field("first name").and_then(|v| v.as_str());
    let last = record.field("last name").and_then(|v| v.as_str());
    let combined = [first, last]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if combined.is_empty() {
        None
    } else {
        Some(combined)
    }
}

/// All records whose display name contains `query`, case-insensitively.
/// A blank query matches nothing.
pub fn search_by_name<'a>(snapshot: &'a TreeSnapshot, query: &str) -> Vec<&'a PersonRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    snapshot
        .iter()
        .filter(|record| {
            display_name(record)
                .map(|name| name.to_lowercase().contains(&query))
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> TreeSnapshot {
        TreeSnapshot::from_value(&json!([
            {"id": "p1", "name": "Anna Kowalska"},
            {"id": "p2", "first name": "Jan", "last name": "Kowalski"},
            {"id": "p3", "first name": "Maria"},
            {"id": "p4"},
        ]))
        .expect("valid snapshot")
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let snap = snapshot();
        let hits = search_by_name(&snap, "kowal");
        let ids: Vec<&str> = hits.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn composed_names_are_searchable() {
        let snap = snapshot();
        let hits = search_by_name(&snap, "jan kowalski");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), "p2");
    }

    #[test]
    fn blank_query_matches_nothing() {
        let snap = snapshot();
        assert!(search_by_name(&snap, "  ").is_empty());
    }

    #[test]
    fn nameless_records_never_match() {
        let snap = snapshot();
        assert!(search_by_name(&snap, "p4").is_empty());
    }
}
