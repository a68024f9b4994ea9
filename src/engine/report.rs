// src/engine/report.rs

use std::fmt;

use crate::detect::Outcome;
use crate::errors::PagewatchError;

/// What happened to one resource during a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceStatus {
    FirstSeen,
    Unchanged,
    Changed { notified: bool },
    FetchFailed(String),
    StorageFailed(String),
}

impl ResourceStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ResourceStatus::FetchFailed(_) | ResourceStatus::StorageFailed(_)
        )
    }
}

impl From<Outcome> for ResourceStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FirstSeen => ResourceStatus::FirstSeen,
            Outcome::Unchanged => ResourceStatus::Unchanged,
            Outcome::Changed { notified } => ResourceStatus::Changed { notified },
        }
    }
}

impl From<&PagewatchError> for ResourceStatus {
    fn from(err: &PagewatchError) -> Self {
        match err {
            PagewatchError::Fetch { reason, .. } => ResourceStatus::FetchFailed(reason.clone()),
            other => ResourceStatus::StorageFailed(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceStatus::FirstSeen => f.write_str("first seen"),
            ResourceStatus::Unchanged => f.write_str("unchanged"),
            ResourceStatus::Changed { notified: true } => f.write_str("changed and notified"),
            ResourceStatus::Changed { notified: false } => {
                f.write_str("changed (notification failed)")
            }
            ResourceStatus::FetchFailed(reason) => write!(f, "fetch failed: {reason}"),
            ResourceStatus::StorageFailed(reason) => write!(f, "storage failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReport {
    pub url: String,
    pub status: ResourceStatus,
}

/// Per-resource results of one cycle, in watchlist order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub resources: Vec<ResourceReport>,
    /// Shutdown was observed before every resource was checked.
    pub cancelled: bool,
}

impl CycleReport {
    pub fn status_of(&self, url: &str) -> Option<&ResourceStatus> {
        self.resources
            .iter()
            .find(|r| r.url == url)
            .map(|r| &r.status)
    }

    pub fn changed(&self) -> usize {
        self.resources
            .iter()
            .filter(|r| matches!(r.status, ResourceStatus::Changed { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.resources.iter().filter(|r| r.status.is_failure()).count()
    }
}
