//! The application orchestrator.
//!
//! Owns the edit engine, the sync coordinator, the renderer handle, and
//! the message box. The remote store is passed into the operations that
//! need it; its subscription callbacks are wired up by [`connect`] and
//! delivered on the host's single-threaded event queue.
//!
//! Data flow: form submitted -> `save_tree` serializes the whole current
//! snapshot to the store -> the backend fans the change out -> the
//! subscription hands the snapshot to `apply_remote_snapshot`, which
//! replaces local state, resolves focus, and re-renders.

use crate::notify::{MessageBox, Severity};
use crate::render::Renderer;
use crate::search::search_by_name;
use famtree_core::{EditError, EditTree, PersonRecord, TreeSnapshot};
use famtree_sync::{RemoteStore, StoreError, SyncCoordinator};
use indexmap::IndexMap;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

pub struct App {
    tree: EditTree,
    sync: SyncCoordinator,
    renderer: Box<dyn Renderer>,
    messages: MessageBox,
    first_load: bool,
}

impl App {
    pub fn new(initial: &TreeSnapshot, sync: SyncCoordinator, renderer: Box<dyn Renderer>) -> Self {
        Self {
            tree: EditTree::new(initial),
            sync,
            renderer,
            messages: MessageBox::new(),
            first_load: true,
        }
    }

    pub fn messages(&self) -> &MessageBox {
        &self.messages
    }

    pub fn current_snapshot(&self) -> TreeSnapshot {
        self.tree.current_snapshot()
    }

    /// Adds a person through the edit engine; rejections surface as
    /// error notices and leave state untouched.
    pub fn add_member(&mut self, record: PersonRecord) -> Result<(), EditError> {
        self.tree.add_member(record).inspect_err(|err| {
            self.messages.show(err.to_string(), Severity::Error);
        })
    }

    pub fn edit_member(
        &mut self,
        id: &str,
        patch: &IndexMap<String, Value>,
    ) -> Result<(), EditError> {
        self.tree.edit_member(id, patch).inspect_err(|err| {
            self.messages.show(err.to_string(), Severity::Error);
        })
    }

    pub fn remove_member(&mut self, id: &str) -> Result<(), EditError> {
        self.tree.remove_member(id).inspect_err(|err| {
            self.messages.show(err.to_string(), Severity::Error);
        })
    }

    pub fn undo(&mut self) {
        self.tree.undo();
    }

    pub fn redo(&mut self) {
        self.tree.redo();
    }

    /// The form-submitted signal carries no payload: the whole current
    /// snapshot is serialized and written, no diffing.
    pub fn handle_form_submitted(&mut self, store: &mut dyn RemoteStore) -> Result<(), StoreError> {
        self.save_tree(store)
    }

    /// Writes the full snapshot to the remote store. An empty tree
    /// short-circuits with an info notice. The focused person is recorded
    /// as the saved-id hint before the write; on success it also becomes
    /// the durable preference, on failure the hint is dropped so a stale
    /// focus is never restored by a later update.
    pub fn save_tree(&mut self, store: &mut dyn RemoteStore) -> Result<(), StoreError> {
        let snapshot = self.tree.current_snapshot();
        if snapshot.is_empty() {
            self.messages
                .show("The tree is empty, nothing to save.", Severity::Info);
            return Ok(());
        }

        let focus = self
            .renderer
            .current_focus()
            .or_else(|| snapshot.ids().next().map(String::from));
        if let Some(id) = &focus {
            self.sync.note_saved(id.clone());
        }

        self.messages.show("Saving...", Severity::Info);
        info!(records = snapshot.len(), "writing snapshot to remote store");

        match store.write_all(&snapshot) {
            Ok(()) => {
                if let Some(id) = &focus {
                    self.sync.note_user_focus(id);
                }
                self.messages
                    .show("Tree saved successfully.", Severity::Success);
                Ok(())
            }
            Err(err) => {
                self.sync.clear_saved();
                warn!(%err, "snapshot write failed");
                self.messages
                    .show(format!("Save failed: {err}"), Severity::Error);
                Err(err)
            }
        }
    }

    /// Reconciliation pass: the remote snapshot is authoritative and
    /// replaces local state wholesale (unsaved edits are overwritten, the
    /// undo chain restarts). Focus is resolved and the renderer
    /// re-commanded. Never persists a preference.
    pub fn apply_remote_snapshot(&mut self, snapshot: &TreeSnapshot) {
        debug!(records = snapshot.len(), "remote snapshot arrived");
        self.tree.replace_snapshot(snapshot);
        let focus = self.sync.resolve_focus(snapshot);
        self.renderer.render(snapshot, focus.as_deref());

        if self.first_load {
            self.first_load = false;
        } else {
            self.messages
                .show("Tree synchronized with the remote store.", Severity::Info);
        }
    }

    /// Store-side errors surface as notices; recovery stays with the
    /// backend.
    pub fn handle_store_error(&mut self, err: &StoreError) {
        warn!(%err, "remote store reported an error");
        self.messages
            .show(format!("Connection error: {err}"), Severity::Error);
    }

    /// Focuses the first person whose display name matches `query`.
    /// Explicit navigation: updates the durable preference.
    pub fn search_and_focus(&mut self, query: &str) -> Option<String> {
        let snapshot = self.tree.current_snapshot();
        let id = search_by_name(&snapshot, query)
            .first()
            .map(|record| record.id().to_string())?;
        self.focus_on(&snapshot, &id);
        Some(id)
    }

    /// Focuses a uniformly random person. Explicit navigation: updates
    /// the durable preference.
    pub fn random_pick(&mut self) -> Option<String> {
        let snapshot = self.tree.current_snapshot();
        let id = self.sync.pick_any(&snapshot)?;
        self.focus_on(&snapshot, &id);
        Some(id)
    }

    fn focus_on(&mut self, snapshot: &TreeSnapshot, id: &str) {
        self.sync.note_user_focus(id);
        self.renderer.render(snapshot, Some(id));
    }
}

/// Wires a shared [`App`] to a store subscription. Snapshot deliveries
/// run the reconciliation pass; errors route to the notification sink.
pub fn connect(app: &Rc<RefCell<App>>, store: &mut dyn RemoteStore) -> u64 {
    let on_snapshot = {
        let app = Rc::clone(app);
        Box::new(move |snapshot: TreeSnapshot| {
            app.borrow_mut().apply_remote_snapshot(&snapshot);
        })
    };
    let on_error = {
        let app = Rc::clone(app);
        Box::new(move |err: StoreError| {
            app.borrow_mut().handle_store_error(&err);
        })
    };
    store.subscribe(on_snapshot, on_error)
}
