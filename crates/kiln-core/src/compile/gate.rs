//! Process-wide compile gate.
//!
//! The toolchain keeps shared state in its working directory, so at most one
//! invocation may run at a time. Every compile goes through
//! [`CompileGate::with_exclusive`].

use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tokio::sync::Mutex;

/// Mutual-exclusion gate around compiler invocations.
///
/// Waiters are served in arrival order (tokio's mutex is fair), so no request
/// is starved.
#[derive(Debug, Default)]
pub struct CompileGate {
    lock: Mutex<()>,
}

static GLOBAL: OnceLock<Arc<CompileGate>> = OnceLock::new();

impl CompileGate {
    /// Create a standalone gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide gate shared by every [`Compiler`](super::Compiler)
    /// that does not opt out.
    pub fn global() -> Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Run `f` while holding the gate.
    ///
    /// The guard is dropped when this future completes or is dropped, so the
    /// gate is released on success, error and cancellation alike.
    pub async fn with_exclusive<F, Fut, T>(&self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let waited = Instant::now();
        let _guard = self.lock.lock().await;
        tracing::debug!(wait_ms = millis(waited), "compile gate acquired");

        let held = Instant::now();
        let out = f().await;
        tracing::debug!(held_ms = millis(held), "compile gate released");
        out
    }

    /// Returns true while some caller holds the gate.
    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }
}

/// Milliseconds elapsed since `since`, saturating at `u64::MAX`.
pub(crate) fn millis(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}
