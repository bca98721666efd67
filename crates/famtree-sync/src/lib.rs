//! Synchronization layer for famtree-rs: the wire codec used by the
//! realtime backend, the remote-store subscription surface, durable focus
//! preferences, and the focus-resolution policy that runs on every
//! incoming remote snapshot.

pub mod focus;
pub mod prefs;
pub mod random;
pub mod store;
pub mod wire;

pub use focus::SyncCoordinator;
pub use prefs::{FilePrefs, MemoryPrefs, PreferenceStore};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use store::{MemoryStore, RemoteStore, StoreError};
pub use wire::{decode_records, encode_records, WireError};
