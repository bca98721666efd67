//! Core primitives for famtree-rs.

pub mod edit_tree;
pub mod history;
pub mod person;
pub mod snapshot;

pub use edit_tree::{EditError, EditTree};
pub use history::HistoryLog;
pub use person::{PersonRecord, RecordError, ID_FIELD, NAME_FIELD, PERSON_FIELDS};
pub use snapshot::{SnapshotError, TreeSnapshot};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
