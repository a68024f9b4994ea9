// src/lib.rs

pub mod cli;
pub mod config;
pub mod detect;
pub mod engine;
pub mod errors;
pub mod fetch;
pub mod fs;
pub mod logging;
pub mod notify;
pub mod store;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{
    apply_env_overrides, default_config_path, load_raw, ConfigFile, TELEGRAM_TOKEN_ENV,
};
use crate::detect::ChangeDetector;
use crate::engine::{PollScheduler, RunOptions, Shutdown};
use crate::fetch::HttpFetcher;
use crate::fs::{FileSystem, RealFileSystem};
use crate::notify::sink_from_config;
use crate::store::{
    AddOutcome, FileFingerprintStore, FingerprintStore, MemoryFingerprintStore, RemoveOutcome,
    WatchlistStore,
};
use crate::types::FingerprintStorageMode;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, env, CLI overrides)
/// - the watchlist and fingerprint stores
/// - fetcher, notification sink and change detector
/// - the poll scheduler and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_effective_config(&args)?;
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let watchlist = WatchlistStore::new(cfg.config.watchlist_file.clone(), fs.clone());

    match args.command {
        Command::Add { ref url } => match watchlist.add(url)? {
            AddOutcome::Added => println!("Added {} to watchlist.", url.trim()),
            AddOutcome::AlreadyPresent => println!("{} is already in the watchlist.", url.trim()),
        },
        Command::Remove { ref url } => match watchlist.remove(url)? {
            RemoveOutcome::Removed => {
                build_store(&cfg, fs).forget(url.trim())?;
                println!("Removed {} from watchlist.", url.trim());
            }
            RemoveOutcome::NotPresent => println!("{} is not in the watchlist.", url.trim()),
        },
        Command::List => {
            let urls = watchlist.list()?;
            if urls.is_empty() {
                info!(path = ?watchlist.path(), "watchlist is empty");
            }
            for url in urls {
                println!("{url}");
            }
        }
        Command::Check { ref url } => {
            let mut detector = build_detector(&cfg, fs)?;
            let outcome = detector.check(url.trim()).await?;
            println!("{}: {outcome}", url.trim());
        }
        Command::Run { once, .. } => {
            let detector = build_detector(&cfg, fs)?;
            let (trigger, shutdown) = Shutdown::new();

            // Ctrl-C → graceful shutdown at the next suspension point.
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    eprintln!("failed to listen for Ctrl+C: {e}");
                    return;
                }
                info!("Ctrl+C received; shutting down");
                trigger.cancel();
            });

            let mut scheduler =
                PollScheduler::new(watchlist, detector, cfg.config.interval(), shutdown);
            scheduler
                .run(RunOptions {
                    once,
                    announce_start: cfg.notify.announce_start,
                })
                .await?;
        }
    }

    Ok(())
}

/// Config file → `PAGEWATCH_TELEGRAM_TOKEN` → CLI flags, then validation.
fn load_effective_config(args: &CliArgs) -> Result<ConfigFile> {
    let (path, explicit) = match args.config {
        Some(ref path) => (path.clone(), true),
        None => (default_config_path(), false),
    };

    let mut raw = load_raw(&path, explicit)?;
    apply_env_overrides(&mut raw, std::env::var(TELEGRAM_TOKEN_ENV).ok());
    args.apply_overrides(&mut raw);

    let cfg = ConfigFile::try_from(raw)?;
    debug!(?path, config = ?cfg.config, kind = ?cfg.notify.kind, "configuration loaded");
    Ok(cfg)
}

/// Build the production change detector for the given configuration.
pub fn build_detector(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> Result<ChangeDetector> {
    let fetcher = HttpFetcher::from_config(&cfg.config)?;
    let sink = sink_from_config(cfg)?;

    Ok(ChangeDetector::new(Box::new(fetcher), build_store(cfg, fs), sink))
}

/// Fingerprint store selected by `fingerprint_storage`.
pub fn build_store(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> Box<dyn FingerprintStore> {
    match cfg.config.fingerprint_storage {
        FingerprintStorageMode::File => {
            Box::new(FileFingerprintStore::new(cfg.config.fingerprint_dir(), fs))
        }
        FingerprintStorageMode::Memory => Box::new(MemoryFingerprintStore::new()),
    }
}
