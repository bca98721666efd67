//! Bounded wait for an external widget to become available. Startup is
//! the only unrecoverable failure in the application: when the widget
//! never shows up within the timeout, the session is aborted.

use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Error)]
pub enum InitError {
    #[error("required component did not become available within {waited_ms} ms")]
    Timeout { waited_ms: u128 },
}

/// Polls `probe` until it yields a value or `timeout` elapses.
pub fn wait_for<T, F>(mut probe: F, timeout: Duration, poll: Duration) -> Result<T, InitError>
where
    F: FnMut() -> Option<T>,
{
    let started = Instant::now();
    loop {
        if let Some(value) = probe() {
            return Ok(value);
        }
        if started.elapsed() >= timeout {
            return Err(InitError::Timeout {
                waited_ms: started.elapsed().as_millis(),
            });
        }
        thread::sleep(poll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_as_soon_as_the_probe_succeeds() {
        let mut calls = 0;
        let value = wait_for(
            || {
                calls += 1;
                if calls == 3 {
                    Some("widget")
                } else {
                    None
                }
            },
            Duration::from_secs(1),
            Duration::from_millis(1),
        )
        .expect("probe succeeds");
        assert_eq!(value, "widget");
        assert_eq!(calls, 3);
    }

    #[test]
    fn times_out_when_the_probe_never_succeeds() {
        let err = wait_for(
            || None::<()>,
            Duration::from_millis(5),
            Duration::from_millis(1),
        )
        .expect_err("never available");
        assert!(matches!(err, InitError::Timeout { .. }));
    }
}
