//! Transient on-screen notifications: one pending notice at a time,
//! cleared after a fixed duration. A new notice preempts the old one and
//! restarts the clock.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct MessageBox {
    pending: Option<(Notice, Instant)>,
}

impl MessageBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    /// Clock-explicit variant; `show` delegates here with `Instant::now()`.
    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.pending = Some((
            Notice {
                message: message.into(),
                severity,
            },
            now,
        ));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current_at(Instant::now())
    }

    /// The visible notice, `None` once the TTL has elapsed.
    pub fn current_at(&self, now: Instant) -> Option<&Notice> {
        let (notice, shown_at) = self.pending.as_ref()?;
        if now.duration_since(*shown_at) >= NOTICE_TTL {
            None
        } else {
            Some(notice)
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
