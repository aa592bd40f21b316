use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Explicit, per-call execution context.
///
/// Thread count and cancellation are carried here instead of process-global
/// state: callers build one of these (or use `MatchContext::default()`) and
/// pass it to every batch/nearest-match call.
#[derive(Debug, Clone)]
pub struct MatchContext {
    threads: usize,
    cancel: Arc<AtomicBool>,
}

impl MatchContext {
    /// `threads` is floored at 1; callers that want the process default
    /// should go through `MatchContext::default()` instead.
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Cooperative cancellation handle: setting this prevents further
    /// work-item pickups, but items already in flight complete.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Default for MatchContext {
    /// Physical cores minus one, floored at 1, intersected with
    /// `OMP_THREAD_LIMIT` when that variable parses as a positive integer.
    fn default() -> Self {
        let cores = num_cpus::get().saturating_sub(1).max(1);
        let threads = match std::env::var("OMP_THREAD_LIMIT") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => cores.min(limit),
                Ok(_) | Err(_) => {
                    tracing::warn!(value = %raw, "ignoring non-positive or unparseable OMP_THREAD_LIMIT");
                    cores
                }
            },
            Err(_) => cores,
        };
        Self::new(threads)
    }
}
