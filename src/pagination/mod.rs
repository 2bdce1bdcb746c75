//! Pagination module
//!
//! Continuation-token paging shared by every list/describe operation.
//!
//! # Overview
//!
//! - `ContinuationToken` - opaque cursor; empty and absent both mean "done"
//! - `PageResult` - one page payload plus the token the service returned
//! - `PaginationMode` - auto-iterate or manual (single page)
//! - `Paginated` - requests that carry a token field
//! - `PageFetcher` - one round-trip for a request

mod fetcher;
mod types;

pub use fetcher::{fn_fetcher, FnFetcher, PageFetcher};
pub use types::{ContinuationToken, PageResult, Paginated, PaginationMode};
