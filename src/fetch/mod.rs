// src/fetch/mod.rs

//! Network fetch layer.
//!
//! The detector talks to a [`Fetcher`] instead of an HTTP client directly, so
//! tests can script page contents without a network. [`HttpFetcher`] is the
//! production implementation built on `reqwest`.

pub mod http;

pub use http::HttpFetcher;

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// Trait abstracting how a watched resource's content is retrieved.
pub trait Fetcher: Send + Sync {
    /// Fetch the body of `url` as text.
    ///
    /// Transport failures and non-2xx responses must surface as
    /// [`PagewatchError::Fetch`](crate::errors::PagewatchError::Fetch).
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
