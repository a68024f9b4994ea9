// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagewatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Transport failure or non-2xx response while fetching a watched page.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Durable read/write failure in one of the stores.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The notification sink could not deliver a message.
    #[error("Notification error: {0}")]
    Notification(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PagewatchError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        PagewatchError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, PagewatchError::Fetch { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, PagewatchError::Storage(_) | PagewatchError::IoError(_))
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PagewatchError>;
