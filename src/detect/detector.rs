// src/detect/detector.rs

use tracing::{debug, info, warn};

use crate::detect::fingerprint::Fingerprint;
use crate::detect::Outcome;
use crate::errors::Result;
use crate::fetch::Fetcher;
use crate::notify::{ChangeEvent, NotificationSink};
use crate::store::FingerprintStore;

/// Fetch → fingerprint → compare → persist → notify, for one resource at a time.
///
/// Holds no state of its own between calls; everything it knows about a
/// resource comes from the fingerprint store.
pub struct ChangeDetector {
    fetcher: Box<dyn Fetcher>,
    store: Box<dyn FingerprintStore>,
    sink: Box<dyn NotificationSink>,
}

impl ChangeDetector {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        store: Box<dyn FingerprintStore>,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            fetcher,
            store,
            sink,
        }
    }

    /// Read-only access to the fingerprint store.
    pub fn store(&self) -> &dyn FingerprintStore {
        self.store.as_ref()
    }

    /// Check one resource.
    ///
    /// Fetch errors are returned untouched and leave the stored fingerprint
    /// as it was. On a change the new fingerprint is persisted before the sink
    /// is called, so a failed notification never rolls the update back.
    pub async fn check(&mut self, url: &str) -> Result<Outcome> {
        let body = self.fetcher.fetch(url).await?;
        let current = Fingerprint::of(body.as_bytes());
        debug!(url, fingerprint = %current, bytes = body.len(), "fetched");

        match self.store.load(url)? {
            None => {
                self.store.save(url, &current)?;
                info!(url, "no previous fingerprint; baseline saved");
                Ok(Outcome::FirstSeen)
            }
            Some(previous) if previous == current => {
                info!(url, "no changes detected");
                Ok(Outcome::Unchanged)
            }
            Some(previous) => {
                self.store.save(url, &current)?;
                let event = ChangeEvent::new(url);
                info!(
                    url,
                    previous = %previous,
                    current = %current,
                    detected_at = %event.detected_at,
                    "resource has changed"
                );
                let notified = self.send(&event.message()).await;
                Ok(Outcome::Changed { notified })
            }
        }
    }

    /// Send an arbitrary message through the sink (e.g. the startup notice).
    /// Returns whether delivery succeeded; failures are only logged.
    pub async fn send(&self, message: &str) -> bool {
        match self.sink.notify(message).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "notification failed");
                false
            }
        }
    }
}
