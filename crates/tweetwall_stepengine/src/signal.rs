//! One-shot proceed signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    flag: AtomicBool,
    notify: Notify,
}

/// Signal a step raises to end its display window early.
///
/// The atomic flag is the signal. The notification only wakes a waiting
/// engine, which always re-reads the flag, so a stale wake-up is harmless.
/// Clones share the same flag and may be moved to other tasks or threads.
///
/// # Examples
///
/// ```
/// use tweetwall_stepengine::ProceedSignal;
///
/// let signal = ProceedSignal::new();
/// let handle = signal.clone();
/// handle.signal();
/// handle.signal();
///
/// assert!(signal.take());
/// assert!(!signal.take());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProceedSignal {
    inner: Arc<Inner>,
}

impl ProceedSignal {
    /// Create a lowered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Raising it again before it is consumed is a no-op.
    pub fn signal(&self) {
        self.inner.flag.store(true, Ordering::SeqCst);
        self.inner.notify.notify_one();
    }

    /// Consume the signal, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.inner.flag.swap(false, Ordering::SeqCst)
    }

    /// Lower the signal without consuming a wake-up.
    pub fn clear(&self) {
        self.inner.flag.store(false, Ordering::SeqCst);
    }

    /// Whether the signal is currently raised.
    pub fn is_set(&self) -> bool {
        self.inner.flag.load(Ordering::SeqCst)
    }

    /// Wait until the signal is raised, then consume it.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.notify.notified();
            if self.take() {
                return;
            }
            notified.await;
        }
    }
}
