//! Shutdown coordination for the gateway.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Coordinator for draining both listeners.
///
/// Wraps a broadcast channel with a sticky trigger flag: a subscriber that
/// arrives after (or concurrently with) the trigger still observes it. This
/// matters for the signal task in `main`, which may fire before the
/// supervisor has subscribed its receivers. Clones share the same channel,
/// so any holder may trigger.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// If the trigger already fired, the signal is re-sent so this receiver
    /// resolves immediately instead of waiting forever.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        let rx = self.tx.subscribe();
        if self.triggered.load(Ordering::SeqCst) {
            let _ = self.tx.send(());
        }
        rx
    }

    /// Trigger the shutdown signal.
    ///
    /// The flag is set before the send: a concurrent subscriber either sees
    /// the flag and re-sends, or registered in time for the original send.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
