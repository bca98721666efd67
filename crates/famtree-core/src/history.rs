//! Linear undo/redo log over tree snapshots.
//!
//! Invariant: `cursor < entries.len()`, and the entry at the cursor equals
//! the live snapshot at the moment it was last committed or navigated to.

use crate::snapshot::TreeSnapshot;

#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<TreeSnapshot>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new(initial: TreeSnapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &TreeSnapshot {
        &self.entries[self.cursor]
    }

    /// Appends a committed state. Any redo branch past the cursor is
    /// discarded first.
    pub fn commit(&mut self, state: TreeSnapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }

    /// Steps the cursor back, returning the restored state. `None` when
    /// already at the oldest entry.
    pub fn back(&mut self) -> Option<&TreeSnapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor forward, returning the restored state. `None` when
    /// already at the newest entry.
    pub fn forward(&mut self) -> Option<&TreeSnapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of committed states. Never zero: the log always holds at
    /// least the initial state.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
