//! # botgate-core
//!
//! Core crate for BotGate. Contains the collaborator traits, configuration
//! schemas, shared value types, telemetry setup, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other BotGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::AuthError;
pub use result::AuthResult;
