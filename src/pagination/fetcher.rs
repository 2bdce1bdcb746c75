//! Page fetcher capability
//!
//! A `PageFetcher` performs exactly one round-trip of a list/describe
//! operation. The service clients implement it per paged operation; tests
//! and ad-hoc callers can wrap an async closure with [`fn_fetcher`].

use super::types::PageResult;
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Fetch a single page for a request
#[async_trait]
pub trait PageFetcher<R>: Send + Sync
where
    R: Send + Sync,
{
    /// Payload carried by each page
    type Payload: Send;

    /// Perform one round-trip for `request`
    async fn fetch_page(&self, request: &R) -> Result<PageResult<Self::Payload>>;
}

/// Fetcher backed by an async closure
pub struct FnFetcher<F> {
    f: F,
}

/// Wrap an async closure taking the request by value
pub fn fn_fetcher<F>(f: F) -> FnFetcher<F> {
    FnFetcher { f }
}

#[async_trait]
impl<R, P, F, Fut> PageFetcher<R> for FnFetcher<F>
where
    R: Clone + Send + Sync + 'static,
    P: Send,
    F: Fn(R) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<P>>> + Send,
{
    type Payload = P;

    async fn fetch_page(&self, request: &R) -> Result<PageResult<P>> {
        (self.f)(request.clone()).await
    }
}

impl<F> std::fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}
