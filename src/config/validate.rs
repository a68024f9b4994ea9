// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PagewatchError, Result};
use crate::types::NotifyKind;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PagewatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.notify))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_global_config(cfg)?;
    validate_notify(cfg)?;
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.interval_secs == 0 {
        return Err(PagewatchError::ConfigError(
            "[config].interval_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.config.fetch_timeout_secs == 0 {
        return Err(PagewatchError::ConfigError(
            "[config].fetch_timeout_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.config.watchlist_file.as_os_str().is_empty() {
        return Err(PagewatchError::ConfigError(
            "[config].watchlist_file must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_notify(cfg: &RawConfigFile) -> Result<()> {
    if cfg.notify.kind != NotifyKind::Telegram {
        return Ok(());
    }

    let missing = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

    if missing(&cfg.notify.bot_token) {
        return Err(PagewatchError::ConfigError(
            "[notify].bot_token is required when kind = \"telegram\"".to_string(),
        ));
    }
    if missing(&cfg.notify.chat_id) {
        return Err(PagewatchError::ConfigError(
            "[notify].chat_id is required when kind = \"telegram\"".to_string(),
        ));
    }

    Ok(())
}
