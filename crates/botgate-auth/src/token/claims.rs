//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botgate_core::types::principal::Principal;

/// Issuer string stamped into every locally issued token.
pub const TOKEN_ISSUER: &str = "bot.root";

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The authenticated principal, embedded verbatim.
    pub user: Principal,
    /// Fixed issuer string.
    pub iss: String,
    /// Bot-scoped audience URN, present only when a bot identifier is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Marks a restricted identity-proof token that cannot start a session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_proof_only: Option<bool>,
}

impl SessionClaims {
    /// Whether this token is restricted to identity proof.
    pub fn is_proof_only(&self) -> bool {
        self.identity_proof_only.unwrap_or(false)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    ///
    /// Matches the verifier's boundary convention: a token is valid
    /// through `exp` itself and expired one second past it.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
