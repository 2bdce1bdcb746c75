//! Common types used throughout aws-pager
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Services
// ============================================================================

/// AWS services exposed by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// AWS Budgets (AWS JSON 1.1 protocol)
    Budgets,
    /// AWS End User Messaging Social (REST-JSON protocol)
    SocialMessaging,
}

impl Service {
    /// Identifier used in endpoint environment variables
    /// (`AWS_ENDPOINT_URL_<ID>`)
    pub fn env_id(self) -> &'static str {
        match self {
            Service::Budgets => "BUDGETS",
            Service::SocialMessaging => "SOCIALMESSAGING",
        }
    }

    /// Default public endpoint for a region
    pub fn default_endpoint(self, region: &str) -> String {
        match self {
            // Budgets is a global service
            Service::Budgets => "https://budgets.amazonaws.com".to_string(),
            Service::SocialMessaging => format!("https://social-messaging.{region}.amazonaws.com"),
        }
    }

    /// `X-Amz-Target` prefix for JSON-protocol services
    pub fn target_prefix(self) -> Option<&'static str> {
        match self {
            Service::Budgets => Some("AWSBudgetServiceGateway"),
            Service::SocialMessaging => None,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Budgets => write!(f, "budgets"),
            Service::SocialMessaging => write!(f, "social-messaging"),
        }
    }
}
