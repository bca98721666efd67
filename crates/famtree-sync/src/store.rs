//! Remote-store surface consumed by the application core.
//!
//! The backend is a realtime key-value tree: `write_all` replaces the
//! whole snapshot under the root key, subscriptions fire once immediately
//! with the current state and again after every write. The core never
//! manages reconnection; errors are surfaced through the subscription's
//! error callback and left there.

use crate::wire::{decode_records, encode_records, WireError};
use famtree_core::TreeSnapshot;
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connectivity(String),
    #[error(transparent)]
    Wire(#[from] WireError),
}

pub type SnapshotCallback = Box<dyn FnMut(TreeSnapshot)>;
pub type ErrorCallback = Box<dyn FnMut(StoreError)>;

pub trait RemoteStore {
    /// Replaces the entire remote snapshot. No diffing, no queuing:
    /// overlapping writes are last-write-wins at the backend.
    fn write_all(&mut self, snapshot: &TreeSnapshot) -> Result<(), StoreError>;

    /// Registers a subscriber. The current state is delivered once up
    /// front, then again after every remote change.
    fn subscribe(&mut self, on_snapshot: SnapshotCallback, on_error: ErrorCallback) -> u64;

    fn unsubscribe(&mut self, subscription_id: u64) -> bool;
}

struct Subscriber {
    on_snapshot: SnapshotCallback,
    on_error: ErrorCallback,
}

enum Delivery {
    Snapshot(Value),
    Error(String),
}

/// In-process store over the wire map. Deliveries are queued and handed
/// out on [`MemoryStore::pump`], modeling the single-threaded event queue
/// the real backend delivers callbacks on.
pub struct MemoryStore {
    root: Value,
    next_subscription_id: u64,
    subscribers: BTreeMap<u64, Subscriber>,
    pending: VecDeque<(Option<u64>, Delivery)>,
    offline: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            root: Value::Null,
            next_subscription_id: 1,
            subscribers: BTreeMap::new(),
            pending: VecDeque::new(),
            offline: false,
        }
    }

    /// Raw wire value currently held under the root key.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Makes subsequent writes fail with a connectivity error.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Queues a backend-side error for every subscriber.
    pub fn inject_error(&mut self, message: impl Into<String>) {
        self.pending.push_back((None, Delivery::Error(message.into())));
    }

    /// Delivers all queued snapshots and errors. Returns the number of
    /// deliveries handed out.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Some((target, delivery)) = self.pending.pop_front() {
            match delivery {
                Delivery::Snapshot(value) => match decode_records(&value) {
                    Ok(snapshot) => {
                        for (id, sub) in self.subscribers.iter_mut() {
                            if target.is_none() || target == Some(*id) {
                                (sub.on_snapshot)(snapshot.clone());
                                delivered += 1;
                            }
                        }
                    }
                    Err(err) => {
                        for (id, sub) in self.subscribers.iter_mut() {
                            if target.is_none() || target == Some(*id) {
                                (sub.on_error)(StoreError::Wire(err.clone()));
                                delivered += 1;
                            }
                        }
                    }
                },
                Delivery::Error(message) => {
                    for (id, sub) in self.subscribers.iter_mut() {
                        if target.is_none() || target == Some(*id) {
                            (sub.on_error)(StoreError::Connectivity(message.clone()));
                            delivered += 1;
                        }
                    }
                }
            }
        }
        delivered
    }
}

impl RemoteStore for MemoryStore {
    fn write_all(&mut self, snapshot: &TreeSnapshot) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Connectivity("store offline".to_string()));
        }
        self.root = encode_records(snapshot);
        self.pending
            .push_back((None, Delivery::Snapshot(self.root.clone())));
        Ok(())
    }

    fn subscribe(&mut self, on_snapshot: SnapshotCallback, on_error: ErrorCallback) -> u64 {
        let id = self.next_subscription_id;
        self.next_subscription_id = self.next_subscription_id.saturating_add(1);
        self.subscribers.insert(
            id,
            Subscriber {
                on_snapshot,
                on_error,
            },
        );
        // Initial delivery with the current state, on the next pump.
        self.pending
            .push_back((Some(id), Delivery::Snapshot(self.root.clone())));
        id
    }

    fn unsubscribe(&mut self, subscription_id: u64) -> bool {
        self.subscribers.remove(&subscription_id).is_some()
    }
}
