//! Time Source
//!
//! Injectable wall clock so expiry boundaries are deterministic in tests.

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock interface (for dependency injection).
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since epoch.
    fn now_ms(&self) -> i64;

    /// Current time in whole seconds since epoch.
    fn now_secs(&self) -> i64 {
        self.now_ms() / 1000
    }
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// Fixed clock for testing.
#[derive(Debug)]
pub struct FixedClock {
    now_ms: std::sync::atomic::AtomicI64,
}

impl FixedClock {
    /// Create a clock pinned to the given instant in milliseconds.
    pub fn at_ms(now_ms: i64) -> Self {
        Self {
            now_ms: std::sync::atomic::AtomicI64::new(now_ms),
        }
    }

    /// Create a clock pinned to the given instant in seconds.
    pub fn at_secs(now_secs: i64) -> Self {
        Self::at_ms(now_secs * 1000)
    }

    /// Move the clock forward.
    pub fn advance_ms(&self, delta_ms: i64) {
        self.now_ms
            .fetch_add(delta_ms, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(std::sync::atomic::Ordering::SeqCst)
    }
}
