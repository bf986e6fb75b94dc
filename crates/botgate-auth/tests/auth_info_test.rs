//! Integration tests for the authentication metadata snapshot.

mod helpers;

use std::sync::Arc;

use botgate_core::config::auth::AuthConfig;

use helpers::{MockCloud, MockCredentials, TEST_SECRET, service};

#[tokio::test]
async fn test_info_unpaired_deployment() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::unpaired());

    let info = gate.authentication_info();
    assert!(!info.paired);
    assert_eq!(info.bot_id, None);
    assert!(info.login_enabled);
    assert!(!info.cloud_configured);
    assert_eq!(info.bot_env, "dev");
    assert_eq!(info.cloud_endpoint, None);
}

#[tokio::test]
async fn test_info_paired_deployment() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::paired("support-bot"));

    let info = gate.authentication_info();
    assert!(info.paired);
    assert_eq!(info.bot_id.as_deref(), Some("support-bot"));
    assert!(info.cloud_configured);
    assert_eq!(info.bot_env, "prod");
    assert_eq!(
        info.cloud_endpoint.as_deref(),
        Some("https://cloud.example.com")
    );
}

#[tokio::test]
async fn test_info_never_serializes_key_material() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::paired("support-bot"));

    let json = serde_json::to_string(&gate.authentication_info()).expect("serialize");
    assert!(!json.contains("s3cr3t"));
    assert!(!json.contains("PUBLIC KEY"));
}
