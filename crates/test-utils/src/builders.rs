#![allow(dead_code)]

use std::path::PathBuf;

use pagewatch::config::{ConfigFile, RawConfigFile};
use pagewatch::types::{FingerprintStorageMode, NotifyKind};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn interval_secs(mut self, secs: u64) -> Self {
        self.config.config.interval_secs = secs;
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.config.fetch_timeout_secs = secs;
        self
    }

    pub fn watchlist_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.config.watchlist_file = path.into();
        self
    }

    pub fn state_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.config.state_dir = path.into();
        self
    }

    pub fn fingerprint_storage(mut self, mode: FingerprintStorageMode) -> Self {
        self.config.config.fingerprint_storage = mode;
        self
    }

    pub fn telegram(mut self, token: &str, chat_id: &str) -> Self {
        self.config.notify.kind = NotifyKind::Telegram;
        self.config.notify.bot_token = Some(token.to_string());
        self.config.notify.chat_id = Some(chat_id.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
