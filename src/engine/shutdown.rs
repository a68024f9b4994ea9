// src/engine/shutdown.rs

//! Cooperative cancellation for the poll loop.
//!
//! The host owns a [`ShutdownTrigger`] (wired to Ctrl-C in `lib::run`); the
//! scheduler holds the matching [`Shutdown`] and checks it between resources
//! and while sleeping. Nothing here knows about OS signals.

use std::sync::Arc;

use tokio::sync::watch;

/// Sending half: request a shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    /// Request shutdown. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving half: observe a shutdown request.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// A linked trigger/token pair.
    pub fn new() -> (ShutdownTrigger, Shutdown) {
        let (tx, rx) = watch::channel(false);
        (ShutdownTrigger { tx: Arc::new(tx) }, Shutdown { rx })
    }

    /// A token that is never cancelled.
    pub fn never() -> Shutdown {
        let (_trigger, shutdown) = Shutdown::new();
        shutdown
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been requested. Pends forever if the trigger
    /// is dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
