use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use pagewatch::errors::{PagewatchError, Result};
use pagewatch::fetch::Fetcher;
use pagewatch::notify::NotificationSink;

#[derive(Debug, Clone)]
enum Page {
    Body(String),
    Failure(String),
}

/// A fake fetcher that serves scripted page bodies.
///
/// Clones share state, so a test can keep one handle and change what a URL
/// returns between checks. Unknown URLs fail like a 404.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFetcher {
    pages: Arc<Mutex<HashMap<String, Page>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_body(&self, url: &str, body: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Page::Body(body.to_string()));
    }

    pub fn set_failure(&self, url: &str, reason: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Page::Failure(reason.to_string()));
    }

    /// URLs fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let page = self.pages.lock().unwrap().get(url).cloned();
        self.requests.lock().unwrap().push(url.to_string());

        Box::pin(async move {
            match page {
                Some(Page::Body(body)) => Ok(body),
                Some(Page::Failure(reason)) => Err(PagewatchError::fetch(url, reason)),
                None => Err(PagewatchError::fetch(url, "HTTP status 404 Not Found")),
            }
        })
    }
}

/// A sink that records every message it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        })
    }
}

/// A sink that always fails, counting the attempts.
#[derive(Debug, Clone, Default)]
pub struct FailingSink {
    attempts: Arc<Mutex<usize>>,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl NotificationSink for FailingSink {
    fn notify<'a>(
        &'a self,
        _message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            *self.attempts.lock().unwrap() += 1;
            Err(PagewatchError::Notification("sink unavailable".to_string()))
        })
    }
}
