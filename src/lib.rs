// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # aws-pager
//!
//! Typed command surface for the AWS Budgets and AWS End User Messaging
//! Social (WhatsApp) APIs, built around one shared paginated fetch loop.
//!
//! ## Features
//!
//! - **Paginated Fetch Loop**: continuation-token paging in auto or manual
//!   mode, with cancellation and page-by-page delivery
//! - **Typed Requests**: builders that drop nested objects nobody filled in
//! - **Output Projection**: `--select` resolved once per command
//! - **Confirmation**: force, what-if, or an interactive prompt before
//!   mutating calls
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aws_pager::config::ClientConfig;
//! use aws_pager::engine::collect_all;
//! use aws_pager::model::budgets::DescribeBudgetsRequest;
//! use aws_pager::pagination::PaginationMode;
//! use aws_pager::services::BudgetsClient;
//!
//! #[tokio::main]
//! async fn main() -> aws_pager::Result<()> {
//!     let config = ClientConfig::default().with_env();
//!     let client = BudgetsClient::from_config(config)?;
//!
//!     let request = DescribeBudgetsRequest::new("111122223333");
//!     let pages = collect_all(request, &client, PaginationMode::Auto).await?;
//!     for page in pages {
//!         for budget in page.budgets {
//!             println!("{}", budget.budget_name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI: parse flags → resolve --select → confirm → run         │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────────┬──────────────────────┐
//! │    Engine    │      Services          │        Model         │
//! ├──────────────┼────────────────────────┼──────────────────────┤
//! │ FetchLoop    │ BudgetsClient          │ Requests/Responses   │
//! │ page_stream  │ SocialMessagingClient  │ Null-dropping        │
//! │ collect_all  │ (PageFetcher impls)    │ builders             │
//! └──────────────┴────────────────────────┴──────────────────────┘
//!                               │
//! ┌──────────────────────────────────────────────────────────────┐
//! │  HTTP: AWS JSON 1.1 (X-Amz-Target) and REST-JSON             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport for the AWS wire protocols
pub mod http;

/// Continuation tokens, pages and the fetcher trait
pub mod pagination;

/// Paginated fetch loop
pub mod engine;

/// Request and response models
pub mod model;

/// `--select` output projection
pub mod select;

/// Confirmation before mutating calls
pub mod confirm;

/// Service clients
pub mod services;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use engine::{collect_all, page_stream, FetchLoop, LoopState, LoopStats};
pub use pagination::{ContinuationToken, PageFetcher, PageResult, Paginated, PaginationMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
