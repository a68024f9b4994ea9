// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable that overrides `[notify].bot_token`.
pub const TELEGRAM_TOKEN_ENV: &str = "PAGEWATCH_TELEGRAM_TOKEN";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the raw configuration used by the binary.
///
/// A missing file is only tolerated when the path was not given explicitly
/// (the default `Pagewatch.toml`); in that case all defaults apply.
pub fn load_raw(path: impl AsRef<Path>, explicit: bool) -> Result<RawConfigFile> {
    let path = path.as_ref();
    if !explicit && !path.exists() {
        debug!(?path, "no config file found; using defaults");
        return Ok(RawConfigFile::default());
    }
    load_from_path(path)
}

/// Apply values coming from the environment on top of the file contents.
///
/// `token_override` is normally the value of `PAGEWATCH_TELEGRAM_TOKEN`; it
/// replaces the configured bot token when non-empty.
pub fn apply_env_overrides(raw: &mut RawConfigFile, token_override: Option<String>) {
    if let Some(token) = token_override.filter(|t| !t.trim().is_empty()) {
        raw.notify.bot_token = Some(token);
    }
}

/// Default config path: `Pagewatch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Pagewatch.toml")
}
