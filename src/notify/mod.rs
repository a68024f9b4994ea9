// src/notify/mod.rs

//! Notification sinks.
//!
//! The detector hands every [`ChangeEvent`] to a [`NotificationSink`]. Delivery
//! is best effort: a sink error is logged by the caller and never undoes the
//! fingerprint update that produced the event.

pub mod log_sink;
pub mod telegram;

pub use log_sink::LogSink;
pub use telegram::TelegramSink;

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::config::{ConfigFile, NotifySection};
use crate::errors::{PagewatchError, Result};
use crate::types::NotifyKind;

/// Message sent once when the poll loop starts.
pub const STARTUP_MESSAGE: &str = "pagewatch started!";

/// Trait abstracting where change messages go.
pub trait NotificationSink: Send + Sync {
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// A detected change of one watched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub url: String,
    pub detected_at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            detected_at: Utc::now(),
        }
    }

    /// Text handed to the sink.
    pub fn message(&self) -> String {
        format!("resource {} has changed.", self.url)
    }
}

/// Build the sink selected by `[notify].kind`.
pub fn sink_from_config(cfg: &ConfigFile) -> Result<Box<dyn NotificationSink>> {
    match cfg.notify.kind {
        NotifyKind::Log => Ok(Box::new(LogSink)),
        NotifyKind::Telegram => {
            let (token, chat_id) = telegram_credentials(&cfg.notify)?;
            Ok(Box::new(TelegramSink::new(
                token,
                chat_id,
                cfg.config.fetch_timeout(),
            )?))
        }
    }
}

fn telegram_credentials(notify: &NotifySection) -> Result<(&str, &str)> {
    match (notify.bot_token.as_deref(), notify.chat_id.as_deref()) {
        (Some(token), Some(chat_id)) => Ok((token, chat_id)),
        _ => Err(PagewatchError::ConfigError(
            "telegram notifications need both bot_token and chat_id".to_string(),
        )),
    }
}
