//! Application glue for famtree-rs: the notification sink, the renderer
//! boundary, bounded-wait initialization, presentation helpers, and the
//! [`App`] orchestrator that wires the edit engine to the remote store.

pub mod app;
pub mod init;
pub mod labels;
pub mod layout;
pub mod notify;
pub mod render;
pub mod search;

pub use app::{connect, App};
pub use init::{wait_for, InitError, POLL_INTERVAL, STARTUP_TIMEOUT};
pub use notify::{MessageBox, Notice, Severity, NOTICE_TTL};
pub use render::Renderer;
