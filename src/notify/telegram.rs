// src/notify/telegram.rs

//! Delivery through the Telegram Bot API (`sendMessage`).

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::errors::{PagewatchError, Result};

use super::NotificationSink;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Posts each message to one chat.
pub struct TelegramSink {
    client: reqwest::Client,
    /// Contains the bot token; never logged.
    endpoint: String,
    chat_id: String,
}

impl fmt::Debug for TelegramSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramSink")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramSink {
    pub fn new(token: &str, chat_id: &str, timeout: Duration) -> Result<Self> {
        Self::with_api_base(TELEGRAM_API_BASE, token, chat_id, timeout)
    }

    /// Same as [`TelegramSink::new`] against a different API host.
    pub fn with_api_base(
        api_base: &str,
        token: &str,
        chat_id: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PagewatchError::ConfigError(format!("building HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token),
            chat_id: chat_id.to_string(),
        })
    }
}

impl NotificationSink for TelegramSink {
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let body = SendMessage {
                chat_id: &self.chat_id,
                text: message,
            };

            // `without_url` keeps the token out of error messages.
            let response = self
                .client
                .post(&self.endpoint)
                .json(&body)
                .send()
                .await
                .map_err(|e| PagewatchError::Notification(e.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(PagewatchError::Notification(format!(
                    "telegram sendMessage returned {status}"
                )));
            }

            debug!(chat_id = %self.chat_id, "telegram message delivered");
            Ok(())
        })
    }
}
