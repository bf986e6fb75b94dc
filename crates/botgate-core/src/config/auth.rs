//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Whether root login is enabled at all.
    ///
    /// When disabled, token refresh degrades to a scheme-checked
    /// passthrough for deployments that never authenticate.
    #[serde(default = "default_login_enabled")]
    pub login_enabled: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: default_token_ttl(),
            login_enabled: default_login_enabled(),
        }
    }
}

fn default_token_ttl() -> u64 {
    360
}

fn default_login_enabled() -> bool {
    true
}
