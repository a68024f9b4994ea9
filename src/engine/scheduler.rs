// src/engine/scheduler.rs

use std::fmt;
use std::time::Duration;

use anyhow::anyhow;
use tracing::{error, info, warn};

use crate::detect::ChangeDetector;
use crate::engine::report::{CycleReport, ResourceReport, ResourceStatus};
use crate::engine::shutdown::Shutdown;
use crate::errors::Result;
use crate::notify::STARTUP_MESSAGE;
use crate::store::WatchlistStore;

/// Lifecycle of the poll loop: `Idle -> Running -> (Idle | Stopped)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Between cycles (or not started yet).
    Idle,
    /// Walking the watchlist.
    Running,
    /// Terminal; the scheduler will not run again.
    Stopped,
}

/// Options for [`PollScheduler::run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Run a single cycle and stop (used for `run --once`).
    pub once: bool,
    /// Send [`STARTUP_MESSAGE`] through the sink before the first cycle.
    pub announce_start: bool,
}

/// Drives the change detector over the whole watchlist on a fixed cadence.
pub struct PollScheduler {
    watchlist: WatchlistStore,
    detector: ChangeDetector,
    interval: Duration,
    shutdown: Shutdown,
    state: SchedulerState,
}

impl fmt::Debug for PollScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollScheduler")
            .field("watchlist", &self.watchlist)
            .field("interval", &self.interval)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PollScheduler {
    pub fn new(
        watchlist: WatchlistStore,
        detector: ChangeDetector,
        interval: Duration,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            watchlist,
            detector,
            interval,
            shutdown,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn detector(&self) -> &ChangeDetector {
        &self.detector
    }

    /// One pass over the watchlist, in list order.
    ///
    /// Per-resource failures are recorded in the report and never end the
    /// cycle. Shutdown is checked before each resource; once observed, no
    /// further resource is started. Only a failure to read the watchlist
    /// itself (or calling this on a stopped scheduler) is returned as an error.
    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        self.ensure_not_stopped()?;
        let urls = self.watchlist.list()?;
        let mut report = CycleReport::default();

        for url in urls {
            if self.shutdown.is_cancelled() {
                info!(remaining_from = %url, "shutdown requested; ending cycle early");
                report.cancelled = true;
                break;
            }

            let status = match self.detector.check(&url).await {
                Ok(outcome) => ResourceStatus::from(outcome),
                Err(e) => {
                    let status = ResourceStatus::from(&e);
                    if e.is_fetch() {
                        warn!(url = %url, error = %e, "fetch failed; skipping this cycle");
                    } else {
                        error!(url = %url, error = %e, "storage failed; skipping this cycle");
                    }
                    status
                }
            };

            info!(url = %url, status = %status, "resource checked");
            report.resources.push(ResourceReport { url, status });
        }

        Ok(report)
    }

    /// Poll until shutdown (or after one cycle with `once`).
    ///
    /// Returns an error only when called on a scheduler that already stopped.
    pub async fn run(&mut self, options: RunOptions) -> Result<()> {
        self.ensure_not_stopped()?;

        info!(interval_secs = self.interval.as_secs(), "poll scheduler started");

        if options.announce_start {
            self.detector.send(STARTUP_MESSAGE).await;
        }

        loop {
            if self.shutdown.is_cancelled() {
                break;
            }

            self.state = SchedulerState::Running;
            info!("checking for page changes");
            match self.run_cycle().await {
                Ok(report) => info!(
                    checked = report.resources.len(),
                    changed = report.changed(),
                    failed = report.failed(),
                    cancelled = report.cancelled,
                    "cycle finished"
                ),
                Err(e) => error!(error = %e, "could not read watchlist; cycle skipped"),
            }
            self.state = SchedulerState::Idle;

            if options.once || self.shutdown.is_cancelled() {
                break;
            }

            info!(secs = self.interval.as_secs(), "waiting before the next cycle");
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.shutdown.cancelled() => {
                    info!("shutdown requested during sleep");
                    break;
                }
            }
        }

        self.state = SchedulerState::Stopped;
        info!("poll scheduler stopped");
        Ok(())
    }

    fn ensure_not_stopped(&self) -> Result<()> {
        if self.state == SchedulerState::Stopped {
            return Err(anyhow!("poll scheduler already stopped").into());
        }
        Ok(())
    }
}
