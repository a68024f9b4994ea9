use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::errors::Result;

use super::NotificationSink;

/// Sink that only writes the message to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify<'a>(
        &'a self,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            info!(target: "pagewatch::notify", "{message}");
            Ok(())
        })
    }
}
