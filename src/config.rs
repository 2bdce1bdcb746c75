//! Client configuration
//!
//! `ClientConfig` is built once per invocation and passed explicitly to
//! the service clients. Sources, lowest precedence first: defaults, a
//! YAML/JSON file, the environment, then CLI overrides.

use crate::error::{Error, Result};
use crate::types::{Service, StringMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Region used when nothing else is configured
pub const DEFAULT_REGION: &str = "us-east-1";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration shared by the service clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// AWS region
    pub region: String,

    /// Endpoint for every service (overridden per service)
    pub endpoint_url: Option<String>,

    /// Per-service endpoint overrides
    pub endpoints: HashMap<Service, String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent string
    pub user_agent: String,

    /// Headers added to every request
    pub default_headers: StringMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            endpoints: HashMap::new(),
            timeout_secs: 30,
            user_agent: format!("aws-pager/{}", env!("CARGO_PKG_VERSION")),
            default_headers: StringMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse from a YAML or JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment lookup
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(region) = non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")) {
            self.region = region;
        }
        // A global endpoint from the environment outranks per-service entries from the file
        if let Some(url) = non_empty("AWS_ENDPOINT_URL") {
            self.endpoint_url = Some(url);
            self.endpoints.clear();
        }
        for service in [Service::Budgets, Service::SocialMessaging] {
            let key = format!("AWS_ENDPOINT_URL_{}", service.env_id());
            if let Some(url) = non_empty(&key) {
                self.endpoints.insert(service, url);
            }
        }
        self
    }

    /// Validate field values
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(Error::missing_field("region"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_config(
                "timeout_secs",
                "must be greater than zero",
            ));
        }
        let urls = self.endpoint_url.iter().chain(self.endpoints.values());
        for url in urls {
            url::Url::parse(url)
                .map_err(|e| Error::invalid_config("endpoint_url", format!("{url}: {e}")))?;
        }
        Ok(())
    }

    /// Resolve the endpoint for a service
    pub fn endpoint_for(&self, service: Service) -> String {
        self.endpoints
            .get(&service)
            .or(self.endpoint_url.as_ref())
            .cloned()
            .unwrap_or_else(|| service.default_endpoint(&self.region))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the endpoint for every service
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = Some(url.into());
        self
    }

    /// Set the endpoint for one service
    pub fn service_endpoint(mut self, service: Service, url: impl Into<String>) -> Self {
        self.config.endpoints.insert(service, url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
