//! Read-only trust-mode metadata.

use serde::{Deserialize, Serialize};

use botgate_core::config::auth::AuthConfig;
use botgate_core::types::pairing::PairingSnapshot;

/// Snapshot of the deployment's trust mode, safe to expose to callers.
///
/// Never carries secret or certificate material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    /// Whether the deployment is paired to the cloud control plane.
    pub paired: bool,
    /// The bound bot identifier, if any.
    pub bot_id: Option<String>,
    /// Whether root login is enabled.
    pub login_enabled: bool,
    /// Whether a control-plane endpoint is configured at all.
    pub cloud_configured: bool,
    /// Environment label of the bound bot.
    pub bot_env: String,
    /// The control-plane endpoint, exposed only when paired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_endpoint: Option<String>,
}

/// Produces [`AuthenticationInfo`] snapshots. Pure; no failure modes.
pub struct AuthInfoProvider {
    /// Pairing state captured at construction.
    pairing: PairingSnapshot,
    /// Whether root login is enabled.
    login_enabled: bool,
}

impl AuthInfoProvider {
    /// Creates a new provider from auth configuration.
    pub fn new(pairing: PairingSnapshot, config: &AuthConfig) -> Self {
        Self {
            pairing,
            login_enabled: config.login_enabled,
        }
    }

    /// Returns the current trust-mode metadata.
    pub fn info(&self) -> AuthenticationInfo {
        AuthenticationInfo {
            paired: self.pairing.paired,
            bot_id: self.pairing.bot_id.clone(),
            login_enabled: self.login_enabled,
            cloud_configured: self.pairing.cloud_configured(),
            bot_env: self.pairing.bot_env.clone(),
            cloud_endpoint: self
                .pairing
                .paired
                .then(|| self.pairing.cloud_endpoint.clone()),
        }
    }
}
