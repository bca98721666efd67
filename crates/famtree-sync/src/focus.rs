//! Focus resolution: which person the renderer centers on after a
//! remote snapshot arrives.
//!
//! The coordinator owns the transient just-saved hint (set right before a
//! local save, consumed by the next reconciliation pass) and the durable
//! preference behind a [`PreferenceStore`]. Overlapping saves overwrite
//! the hint: last intent wins.

use crate::prefs::PreferenceStore;
use crate::random::RandomSource;
use famtree_core::TreeSnapshot;

pub struct SyncCoordinator {
    saved_hint: Option<String>,
    prefs: Box<dyn PreferenceStore>,
    random: Box<dyn RandomSource>,
}

impl SyncCoordinator {
    pub fn new(prefs: Box<dyn PreferenceStore>, random: Box<dyn RandomSource>) -> Self {
        Self {
            saved_hint: None,
            prefs,
            random,
        }
    }

    /// Records the id a local save is about to persist. The next
    /// reconciliation pass restores focus to it when it survives.
    pub fn note_saved(&mut self, id: impl Into<String>) {
        self.saved_hint = Some(id.into());
    }

    /// Drops the pending hint, e.g. after a failed write, so a stale
    /// preference is never applied on a later successful update.
    pub fn clear_saved(&mut self) {
        self.saved_hint = None;
    }

    pub fn saved_hint(&self) -> Option<&str> {
        self.saved_hint.as_deref()
    }

    /// Persists the durable preference. Called only for explicit user
    /// navigation (search, random pick, local save), never for
    /// remote-triggered focus changes.
    pub fn note_user_focus(&mut self, id: &str) {
        self.prefs.store(id);
    }

    pub fn preferred(&self) -> Option<String> {
        self.prefs.load()
    }

    /// Runs once per incoming remote snapshot, after the local record
    /// list has been replaced. First matching branch wins:
    ///
    /// 1. pending hint, present in the snapshot -> that id
    /// 2. pending hint, absent -> uniform random id
    /// 3. durable preference, present -> that id
    /// 4. durable preference, absent -> uniform random id
    /// 5. neither -> uniform random id
    ///
    /// An empty snapshot resolves to `None`. The pending hint is consumed
    /// exactly once per call, whichever branch fires. Never errors.
    pub fn resolve_focus(&mut self, snapshot: &TreeSnapshot) -> Option<String> {
        let hint = self.saved_hint.take();
        if snapshot.is_empty() {
            return None;
        }
        if let Some(id) = hint {
            if snapshot.contains(&id) {
                return Some(id);
            }
            return self.random_id(snapshot);
        }
        if let Some(id) = self.prefs.load() {
            if snapshot.contains(&id) {
                return Some(id);
            }
        }
        self.random_id(snapshot)
    }

    /// Uniform pick over the snapshot, for the random-pick button.
    /// `None` when no candidates exist.
    pub fn pick_any(&mut self, snapshot: &TreeSnapshot) -> Option<String> {
        self.random_id(snapshot)
    }

    // Uniform pick over well-formed records; blank ids never enter the
    // candidate pool.
    fn random_id(&mut self, snapshot: &TreeSnapshot) -> Option<String> {
        let candidates: Vec<&str> = snapshot.ids().filter(|id| !id.is_empty()).collect();
        if candidates.is_empty() {
            return None;
        }
        let index = self.random.pick(candidates.len());
        Some(candidates[index].to_string())
    }
}

impl std::fmt::Debug for SyncCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncCoordinator")
            .field("saved_hint", &self.saved_hint)
            .field("preferred", &self.prefs.load())
            .finish()
    }
}
