//! Time source port.
//!
//! Abstracted so the future-timestamp check is deterministic in tests.

/// Clock the pipeline validates timestamps against.
pub trait TimeSource: Send + Sync {
    /// Current time, unix seconds.
    fn now_unix(&self) -> i64;
}

/// Default wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
