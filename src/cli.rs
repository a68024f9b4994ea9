// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The binary doubles as the management surface for the watchlist
//! (`add`, `remove`, `list`) and as the long-running poller (`run`).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::RawConfigFile;

/// Command-line arguments for `pagewatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pagewatch",
    version,
    about = "Poll web pages and get notified when their content changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Pagewatch.toml` in the current working directory; if that
    /// file does not exist, built-in defaults are used.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `[config].watchlist_file`.
    #[arg(long, global = true, value_name = "PATH")]
    pub watchlist: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PAGEWATCH_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Poll every watched page until interrupted.
    Run {
        /// Run a single cycle, then exit.
        #[arg(long)]
        once: bool,

        /// Override `[config].interval_secs`.
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
    /// Add a page to the watchlist.
    Add {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Remove a page from the watchlist.
    Remove {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Print the watchlist.
    List,
    /// Check a single page once and print the outcome.
    Check {
        #[arg(value_name = "URL")]
        url: String,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Apply flag overrides on top of the file contents (before validation).
    pub fn apply_overrides(&self, raw: &mut RawConfigFile) {
        if let Some(ref path) = self.watchlist {
            raw.config.watchlist_file = path.clone();
        }
        if let Command::Run {
            interval: Some(secs),
            ..
        } = self.command
        {
            raw.config.interval_secs = secs;
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
