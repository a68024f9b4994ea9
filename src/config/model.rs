// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::{FingerprintStorageMode, NotifyKind};

/// Directory (below `state_dir`) holding one fingerprint file per resource.
pub const FINGERPRINT_SUBDIR: &str = "fingerprints";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// interval_secs = 600
/// fetch_timeout_secs = 30
/// watchlist_file = "watchlist.txt"
/// state_dir = ".pagewatch"
///
/// [notify]
/// kind = "telegram"
/// bot_token = "123:abc"
/// chat_id = "42"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Polling behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Notification transport from `[notify]`.
    #[serde(default)]
    pub notify: NotifySection,
}

/// Validated configuration. Obtain one through `ConfigFile::try_from`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub notify: NotifySection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, notify: NotifySection) -> Self {
        Self { config, notify }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Seconds to sleep between the end of one cycle and the start of the next.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Upper bound for a single page fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// File holding the watchlist, one URL per line.
    #[serde(default = "default_watchlist_file")]
    pub watchlist_file: PathBuf,

    /// Directory for durable state (fingerprints).
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    #[serde(default)]
    pub fingerprint_storage: FingerprintStorageMode,

    /// `User-Agent` header sent with every fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_interval_secs() -> u64 {
    600
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_watchlist_file() -> PathBuf {
    PathBuf::from("watchlist.txt")
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".pagewatch")
}

fn default_user_agent() -> String {
    format!("pagewatch/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            watchlist_file: default_watchlist_file(),
            state_dir: default_state_dir(),
            fingerprint_storage: FingerprintStorageMode::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ConfigSection {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn fingerprint_dir(&self) -> PathBuf {
        self.state_dir.join(FINGERPRINT_SUBDIR)
    }
}

/// `[notify]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifySection {
    #[serde(default)]
    pub kind: NotifyKind,

    /// Telegram bot token. `PAGEWATCH_TELEGRAM_TOKEN` takes precedence.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Telegram chat that receives the messages.
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Send a one-off "started" message when the poll loop comes up.
    #[serde(default = "default_announce_start")]
    pub announce_start: bool,
}

fn default_announce_start() -> bool {
    true
}

impl Default for NotifySection {
    fn default() -> Self {
        Self {
            kind: NotifyKind::default(),
            bot_token: None,
            chat_id: None,
            announce_start: default_announce_start(),
        }
    }
}
