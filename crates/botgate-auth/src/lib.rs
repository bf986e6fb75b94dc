//! # botgate-auth
//!
//! Session token lifecycle for BotGate: issuing, verifying, and refreshing
//! bearer tokens under two trust modes: local root login with a symmetric
//! secret, or delegated identity under a paired cloud control plane with an
//! asymmetric certificate.
//!
//! ## Modules
//!
//! - `token` — claims, per-mode signing material selection, token issue and verify
//! - `flow` — login and refresh orchestration, read-only authentication metadata
//! - `service` — facade that captures the pairing snapshot and wires the components

pub mod flow;
pub mod service;
pub mod token;

pub use flow::{AuthInfoProvider, AuthenticationInfo, LoginFlow, RefreshFlow, TokenOutcome};
pub use service::AuthService;
pub use token::{SessionClaims, SigningContext, SigningMaterial, TokenIssuer, TokenVerifier};
