//! Immutable pairing state snapshot.

use serde::{Deserialize, Serialize};

use crate::traits::cloud::CloudProvider;

/// Prefix of the bot-scoped audience URN.
const AUDIENCE_PREFIX: &str = "urn:bot/";

/// Pairing state captured once at construction.
///
/// The token core never re-reads pairing state mid-flight; a pairing
/// change requires reconstructing the core. This keeps every component
/// testable with a plain value instead of a live cloud collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSnapshot {
    /// Whether the deployment is paired to the cloud control plane.
    pub paired: bool,
    /// The bound bot identifier, present only when paired.
    pub bot_id: Option<String>,
    /// Environment label of the bound bot.
    pub bot_env: String,
    /// Configured control-plane endpoint, empty when none is set.
    pub cloud_endpoint: String,
}

impl PairingSnapshot {
    /// Capture the current pairing state from the cloud collaborator.
    pub fn capture(cloud: &dyn CloudProvider) -> Self {
        Self {
            paired: cloud.is_paired(),
            bot_id: cloud.pairing_info().map(|info| info.bot_id),
            bot_env: cloud.bot_env(),
            cloud_endpoint: cloud.cloud_endpoint(),
        }
    }

    /// A snapshot for a deployment with no cloud configured at all.
    pub fn unpaired(bot_env: impl Into<String>) -> Self {
        Self {
            paired: false,
            bot_id: None,
            bot_env: bot_env.into(),
            cloud_endpoint: String::new(),
        }
    }

    /// The bot-scoped audience URN, present only when a bot identifier
    /// is bound. Tokens are held to this audience during verification;
    /// with no bound identifier there is no audience requirement.
    pub fn audience(&self) -> Option<String> {
        self.bot_id
            .as_ref()
            .map(|bot_id| format!("{AUDIENCE_PREFIX}{bot_id}"))
    }

    /// Whether a control-plane endpoint is configured, paired or not.
    pub fn cloud_configured(&self) -> bool {
        !self.cloud_endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_requires_bot_id() {
        let snapshot = PairingSnapshot::unpaired("dev");
        assert_eq!(snapshot.audience(), None);
    }

    #[test]
    fn test_audience_urn_format() {
        let snapshot = PairingSnapshot {
            paired: true,
            bot_id: Some("support-bot".to_string()),
            bot_env: "prod".to_string(),
            cloud_endpoint: "https://cloud.example.com".to_string(),
        };
        assert_eq!(snapshot.audience().as_deref(), Some("urn:bot/support-bot"));
    }

    #[test]
    fn test_cloud_configured() {
        let mut snapshot = PairingSnapshot::unpaired("dev");
        assert!(!snapshot.cloud_configured());
        snapshot.cloud_endpoint = "https://cloud.example.com".to_string();
        assert!(snapshot.cloud_configured());
    }
}
