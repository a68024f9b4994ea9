// src/detect/mod.rs

//! Change detection for a single watched resource.
//!
//! [`ChangeDetector::check`] fetches a page, fingerprints it, compares against
//! the stored fingerprint and decides between first-seen, unchanged and
//! changed. Only a change produces a [`ChangeEvent`](crate::notify::ChangeEvent).

pub mod detector;
pub mod fingerprint;

pub use detector::ChangeDetector;
pub use fingerprint::{resource_key, Fingerprint};

use std::fmt;

/// Result of one successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No fingerprint was stored; the fetched one is now the baseline.
    FirstSeen,
    /// Fingerprint matches the stored one.
    Unchanged,
    /// Fingerprint differs; the store was updated and the sink was called.
    /// `notified` is false when the sink reported a delivery failure.
    Changed { notified: bool },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FirstSeen => f.write_str("first seen"),
            Outcome::Unchanged => f.write_str("unchanged"),
            Outcome::Changed { notified: true } => f.write_str("changed and notified"),
            Outcome::Changed { notified: false } => f.write_str("changed (notification failed)"),
        }
    }
}
