//! Execution engine module
//!
//! The paginated fetch loop driving every list/describe operation.
//!
//! # Overview
//!
//! The engine module provides:
//! - `FetchLoop` - Drives round-trips until the token runs out or manual
//!   paging stops it after one page
//! - `run` - One-shot form of `FetchLoop`
//! - `page_stream` - The same loop exposed as a `Stream` of pages
//! - `collect_all` - Buffers every payload into a `Vec`

mod types;

pub use types::{LoopState, LoopStats};

use crate::error::{Error, Result};
use crate::pagination::{PageFetcher, PageResult, Paginated, PaginationMode};
use futures::Stream;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Paginated fetch loop for a single invocation
pub struct FetchLoop<'a, R, F: ?Sized> {
    /// Request template; its token field is rewritten between pages
    request: R,
    /// Single-page capability
    fetcher: &'a F,
    /// Pagination mode, fixed for the whole run
    mode: PaginationMode,
    /// Host cancellation signal
    cancel: CancellationToken,
    /// Current state
    state: LoopState,
    /// Statistics
    stats: LoopStats,
}

impl<'a, R, F> FetchLoop<'a, R, F>
where
    R: Paginated + Send + Sync,
    F: PageFetcher<R> + ?Sized,
{
    /// Create a new fetch loop
    pub fn new(request: R, fetcher: &'a F, mode: PaginationMode) -> Self {
        Self {
            request,
            fetcher,
            mode,
            cancel: CancellationToken::new(),
            state: LoopState::Fetching,
            stats: LoopStats::default(),
        }
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Get statistics
    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    /// Current request (token reflects the last page followed)
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Run the loop, handing every page to `on_page` as it arrives
    pub async fn run<S>(&mut self, mut on_page: S) -> Result<()>
    where
        S: FnMut(PageResult<F::Payload>),
    {
        self.try_run(|page| {
            on_page(page);
            Ok(())
        })
        .await
    }

    /// Run the loop with a fallible sink; a sink error aborts like a fetch error
    pub async fn try_run<S>(&mut self, mut on_page: S) -> Result<()>
    where
        S: FnMut(PageResult<F::Payload>) -> Result<()>,
    {
        let start = Instant::now();
        self.state = LoopState::Fetching;

        let result = loop {
            if self.cancel.is_cancelled() {
                break Err(Error::Cancelled);
            }

            let fetched = tokio::select! {
                biased;
                () = self.cancel.cancelled() => None,
                result = self.fetcher.fetch_page(&self.request) => Some(result),
            };

            let page = match fetched {
                None => break Err(Error::Cancelled),
                Some(Err(e)) => {
                    warn!(
                        page = self.stats.pages_fetched + 1,
                        error = %e,
                        "Page fetch failed"
                    );
                    break Err(e);
                }
                Some(Ok(page)) => page,
            };

            self.stats.add_page();
            let next = page.continuation();
            debug!(
                page = self.stats.pages_fetched,
                has_more = next.is_some(),
                "Fetched page"
            );

            if let Err(e) = on_page(page) {
                break Err(e);
            }

            match (self.mode, next) {
                (PaginationMode::Auto, Some(token)) => {
                    self.request
                        .set_continuation_token(Some(token.into_inner()));
                }
                (PaginationMode::Manual, Some(token)) => {
                    self.stats.unused_token = Some(token);
                    break Ok(());
                }
                (_, None) => break Ok(()),
            }
        };

        self.state = match &result {
            Ok(()) => LoopState::Done,
            Err(Error::Cancelled) => LoopState::Cancelled,
            Err(_) => LoopState::Failed,
        };
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        debug!(
            pages = self.stats.pages_fetched,
            state = ?self.state,
            "Fetch loop finished"
        );

        result
    }
}

/// Run a fetch loop to completion
pub async fn run<R, F, S>(
    request: R,
    fetcher: &F,
    mode: PaginationMode,
    cancel: CancellationToken,
    on_page: S,
) -> Result<LoopStats>
where
    R: Paginated + Send + Sync,
    F: PageFetcher<R> + ?Sized,
    S: FnMut(PageResult<F::Payload>),
{
    let mut fetch_loop = FetchLoop::new(request, fetcher, mode).with_cancellation(cancel);
    fetch_loop.run(on_page).await?;
    Ok(fetch_loop.stats)
}

/// Run the loop and buffer every payload in page order
pub async fn collect_all<R, F>(
    request: R,
    fetcher: &F,
    mode: PaginationMode,
) -> Result<Vec<F::Payload>>
where
    R: Paginated + Send + Sync,
    F: PageFetcher<R> + ?Sized,
{
    let mut payloads = Vec::new();
    FetchLoop::new(request, fetcher, mode)
        .run(|page| payloads.push(page.payload))
        .await?;
    Ok(payloads)
}

/// Expose the fetch loop as a stream of pages.
///
/// Termination matches [`FetchLoop`]: the stream ends after a page with
/// no token, after the first page in manual mode, or right after the
/// first error.
pub fn page_stream<'a, R, F>(
    request: R,
    fetcher: &'a F,
    mode: PaginationMode,
) -> impl Stream<Item = Result<PageResult<F::Payload>>> + 'a
where
    R: Paginated + Send + Sync + 'a,
    F: PageFetcher<R> + ?Sized,
{
    futures::stream::try_unfold(Some(request), move |pending| async move {
        let Some(mut request) = pending else {
            return Ok(None);
        };

        let page = fetcher.fetch_page(&request).await?;
        let next = match (mode, page.continuation()) {
            (PaginationMode::Auto, Some(token)) => {
                request.set_continuation_token(Some(token.into_inner()));
                Some(request)
            }
            _ => None,
        };

        Ok(Some((page, next)))
    })
}
