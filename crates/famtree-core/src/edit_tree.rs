//! The tree edit engine: owns the canonical in-memory snapshot, validates
//! mutations, tracks a linear undo/redo history, and notifies listeners
//! after every committed change.
//!
//! All entry points run synchronously to completion; listeners observe a
//! deep copy of the snapshot, strictly after the state has landed in the
//! history log.

use crate::history::HistoryLog;
use crate::person::PersonRecord;
use crate::snapshot::TreeSnapshot;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("record requires a non-empty id and name")]
    MissingField,
    #[error("a person with id {0} already exists")]
    DuplicateId(String),
    #[error("no person with id {0}")]
    NotFound(String),
}

type Listener = Box<dyn FnMut(TreeSnapshot)>;

pub struct EditTree {
    snapshot: TreeSnapshot,
    history: HistoryLog,
    next_listener_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

impl EditTree {
    /// Deep-copies `initial` so the caller's value is never aliased, and
    /// seeds the history log with that single state at cursor 0.
    pub fn new(initial: &TreeSnapshot) -> Self {
        let snapshot = initial.clone();
        Self {
            history: HistoryLog::new(snapshot.clone()),
            snapshot,
            next_listener_id: 1,
            listeners: BTreeMap::new(),
        }
    }

    /// Registers a change listener. Every committed mutation, undo/redo
    /// step, and wholesale replacement delivers a snapshot copy.
    pub fn on_change<F>(&mut self, listener: F) -> u64
    where
        F: FnMut(TreeSnapshot) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.listeners.insert(id, Box::new(listener));
        id
    }

    pub fn off_change(&mut self, listener_id: u64) -> bool {
        self.listeners.remove(&listener_id).is_some()
    }

    /// Adds a new person. Requires a non-empty id and display name;
    /// rejects ids already present. No state change on failure.
    pub fn add_member(&mut self, record: PersonRecord) -> Result<(), EditError> {
        if record.id().is_empty() || record.name().is_none() {
            return Err(EditError::MissingField);
        }
        let id = record.id().to_string();
        self.snapshot
            .push(record)
            .map_err(|_| EditError::DuplicateId(id))?;
        self.commit();
        Ok(())
    }

    /// Shallow-merges `patch` onto the person with `id`: patched fields
    /// win, untouched fields are retained, the id is immutable.
    pub fn edit_member(
        &mut self,
        id: &str,
        patch: &IndexMap<String, Value>,
    ) -> Result<(), EditError> {
        let record = self
            .snapshot
            .get_mut(id)
            .ok_or_else(|| EditError::NotFound(id.to_string()))?;
        record.merge(patch);
        self.commit();
        Ok(())
    }

    /// Removes the person with `id`.
    pub fn remove_member(&mut self, id: &str) -> Result<(), EditError> {
        if self.snapshot.remove(id).is_none() {
            return Err(EditError::NotFound(id.to_string()));
        }
        self.commit();
        Ok(())
    }

    /// Steps back one committed state. Silent no-op at the oldest state:
    /// no error, no notification.
    pub fn undo(&mut self) {
        if let Some(state) = self.history.back() {
            self.snapshot = state.clone();
            self.notify();
        }
    }

    /// Steps forward one committed state. Silent no-op at the newest.
    pub fn redo(&mut self) {
        if let Some(state) = self.history.forward() {
            self.snapshot = state.clone();
            self.notify();
        }
    }

    /// Replaces the whole snapshot with remote-authoritative data. The
    /// local undo chain is invalidated: the history log restarts at the
    /// new state. Listeners are notified.
    pub fn replace_snapshot(&mut self, snapshot: &TreeSnapshot) {
        self.snapshot = snapshot.clone();
        self.history = HistoryLog::new(self.snapshot.clone());
        self.notify();
    }

    /// Deep copy of the live snapshot; mutating it never touches engine
    /// state.
    pub fn current_snapshot(&self) -> TreeSnapshot {
        self.snapshot.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    // Single choke point for all mutations: the state lands in the log
    // (truncating any redo branch) before listeners hear about it.
    fn commit(&mut self) {
        self.history.commit(self.snapshot.clone());
        self.notify();
    }

    fn notify(&mut self) {
        for listener in self.listeners.values_mut() {
            listener(self.snapshot.clone());
        }
    }
}

impl std::fmt::Debug for EditTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditTree")
            .field("snapshot", &self.snapshot)
            .field("history_len", &self.history.len())
            .field("history_cursor", &self.history.cursor())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
