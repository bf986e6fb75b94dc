//! Login and refresh orchestration over the token layer.

pub mod info;
pub mod login;
pub mod refresh;

pub use info::{AuthInfoProvider, AuthenticationInfo};
pub use login::LoginFlow;
pub use refresh::RefreshFlow;

use serde::{Deserialize, Serialize};

/// Result of a login or token refresh attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TokenOutcome {
    /// A session token was granted.
    Granted {
        /// The signed bearer token.
        token: String,
    },
    /// The attempt was denied.
    Denied {
        /// Reason for denial.
        reason: String,
    },
}

impl TokenOutcome {
    /// Whether a token was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// The granted token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Granted { token } => Some(token),
            Self::Denied { .. } => None,
        }
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Granted { .. } => None,
            Self::Denied { reason } => Some(reason),
        }
    }
}
