// src/engine/mod.rs

//! Polling engine for pagewatch.
//!
//! A single worker walks the watchlist in order, runs the change detector for
//! each entry, then sleeps for the configured interval. Shutdown is
//! cooperative: it is observed between resources and during the sleep, never
//! in the middle of a fetch.

pub mod report;
pub mod scheduler;
pub mod shutdown;

pub use report::{CycleReport, ResourceReport, ResourceStatus};
pub use scheduler::{PollScheduler, RunOptions, SchedulerState};
pub use shutdown::{Shutdown, ShutdownTrigger};
