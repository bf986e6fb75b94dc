//! Cloud control-plane collaborator trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AuthResult;

/// Pairing metadata for a bot bound to the cloud control plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingInfo {
    /// Identifier of the bot this deployment is bound to.
    pub bot_id: String,
}

/// Boundary to the cloud pairing subsystem.
///
/// The pairing/handshake protocol itself is outside the token core; this
/// trait exposes only the state the core needs to select trust modes and
/// verification material.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Whether this deployment is currently paired to the control plane.
    fn is_paired(&self) -> bool;

    /// Pairing metadata, present only when paired.
    fn pairing_info(&self) -> Option<PairingInfo>;

    /// Fetch the control plane's public key material (PEM).
    ///
    /// Called fresh on every verification under delegated trust; the
    /// certificate may rotate out-of-band.
    async fn certificate(&self) -> AuthResult<String>;

    /// The environment label of the bound bot (e.g. `"prod"`).
    fn bot_env(&self) -> String;

    /// The configured control-plane endpoint, empty when none is set.
    fn cloud_endpoint(&self) -> String;
}
