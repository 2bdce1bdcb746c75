//! Confirmation before mutating calls
//!
//! Commands that change remote state ask a `ConfirmationPolicy` first.
//! The CLI picks the policy from `--force` / `--what-if`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use tracing::{info, warn};

/// Decide whether a mutating operation may proceed
///
/// Implementations may block (an interactive prompt does), so callers on an
/// async runtime should invoke them off the worker threads.
pub trait ConfirmationPolicy: Send + Sync {
    /// Return true to proceed with the described operation
    fn confirm(&self, description: &str) -> bool;
}

/// Always proceed (`--force`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Force;

impl ConfirmationPolicy for Force {
    fn confirm(&self, _description: &str) -> bool {
        true
    }
}

/// Never proceed, only report what would happen (`--what-if`)
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatIf;

impl ConfirmationPolicy for WhatIf {
    fn confirm(&self, description: &str) -> bool {
        info!("What if: performing {description}");
        false
    }
}

/// Ask interactively on the terminal, defaulting to no
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompt;

impl Prompt {
    fn question(description: &str) -> String {
        format!("Are you sure you want to perform {description}?")
    }
}

impl ConfirmationPolicy for Prompt {
    fn confirm(&self, description: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Self::question(description))
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Confirmation prompt failed, treating as declined");
                false
            })
    }
}
