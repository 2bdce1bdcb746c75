//! Service clients
//!
//! One client per AWS service, each method a single round-trip. Paged
//! operations are exposed to the fetch loop through `PageFetcher`
//! implementations keyed by request type.

mod budgets;
mod social;

pub use budgets::BudgetsClient;
pub use social::SocialMessagingClient;

#[cfg(test)]
mod tests;
