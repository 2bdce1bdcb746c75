//! Pagination types and traits
//!
//! Defines the continuation-token abstractions shared by every list or
//! describe operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque cursor marking the position of the next page.
///
/// Never empty: an empty string coming back from a service means
/// "no more pages" and is normalized away by [`ContinuationToken::from_option`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Wrap a token, returning `None` for an empty string
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Normalize an optional wire token (absent and empty are the same)
    pub fn from_option(token: Option<String>) -> Option<Self> {
        token.and_then(Self::new)
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One batch of results returned by a single round-trip
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<P> {
    /// Page payload (a list of items or a single object)
    pub payload: P,
    /// Token for the next page, as returned by the service
    pub next_token: Option<String>,
}

impl<P> PageResult<P> {
    /// Create a page result
    pub fn new(payload: P, next_token: Option<String>) -> Self {
        Self {
            payload,
            next_token,
        }
    }

    /// Create a final page with no continuation
    pub fn last(payload: P) -> Self {
        Self {
            payload,
            next_token: None,
        }
    }

    /// Normalized continuation token for this page
    pub fn continuation(&self) -> Option<ContinuationToken> {
        ContinuationToken::from_option(self.next_token.clone())
    }

    /// Check if another page exists after this one
    pub fn has_more(&self) -> bool {
        self.next_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Transform the payload, keeping the token
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> PageResult<Q> {
        PageResult {
            payload: f(self.payload),
            next_token: self.next_token,
        }
    }
}

/// Whether the fetch loop walks every page or stops after one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Fetch all pages transparently
    #[default]
    Auto,
    /// Fetch exactly one page; the caller drives further paging
    Manual,
}

impl PaginationMode {
    /// Decide the mode from caller input.
    ///
    /// Manual when the caller supplied a non-empty starting token or
    /// explicitly opted out of auto-iteration.
    pub fn resolve(starting_token: Option<&str>, no_auto_iterate: bool) -> Self {
        let has_start = starting_token.is_some_and(|t| !t.is_empty());
        if has_start || no_auto_iterate {
            Self::Manual
        } else {
            Self::Auto
        }
    }

    /// Check if this is manual paging
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// A request that carries a continuation token field
pub trait Paginated {
    /// Current continuation token
    fn continuation_token(&self) -> Option<&str>;

    /// Replace the continuation token
    fn set_continuation_token(&mut self, token: Option<String>);
}
