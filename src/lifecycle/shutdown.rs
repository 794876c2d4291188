//! Stop signal shared between the Ctrl+C listener and the pinger loop.

use tokio::sync::broadcast;

/// Owns the stop channel.
///
/// Capacity is one: the loop only needs to know a stop was requested, and a
/// request made mid-attempt must still be waiting when the attempt ends.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for the pinger loop.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Sender for a task that requests the stop itself (the signal listener).
    pub fn sender(&self) -> broadcast::Sender<()> {
        self.tx.clone()
    }

    /// Request a stop. A no-op when nothing is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
