//! CLI module
//!
//! Command-line interface over the service clients.
//!
//! # Commands
//!
//! - `budgets describe-budgets|describe-budget|create-budget|delete-budget|describe-notifications|describe-subscribers`
//! - `social list-linked-accounts|get-linked-account|disassociate-account|list-tags|tag-resource|untag-resource`
//!
//! List commands stream every page to stdout as it arrives.

mod commands;
mod runner;

pub use commands::{
    BudgetsCommand, Cli, Commands, CreateBudgetArgs, NotificationArgs, OutputFormat, PagingArgs,
    SocialCommand,
};
pub use runner::Runner;
