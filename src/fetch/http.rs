// src/fetch/http.rs

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;

use crate::config::ConfigSection;
use crate::errors::{PagewatchError, Result};

use super::Fetcher;

/// `reqwest`-backed fetcher with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| PagewatchError::ConfigError(format!("building HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn from_config(cfg: &ConfigSection) -> Result<Self> {
        Self::new(cfg.fetch_timeout(), &cfg.user_agent)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            debug!(url, "fetching");
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| PagewatchError::fetch(url, describe(&e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(PagewatchError::fetch(url, format!("HTTP status {status}")));
            }

            response
                .text()
                .await
                .map_err(|e| PagewatchError::fetch(url, describe(&e)))
        })
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    }
}
