//! Facade integration tests against a mock remote API

use std::sync::Arc;

use async_trait::async_trait;
use launchpad::config::CoolifySettings;
use launchpad::deploy::facade::{DeployApi, DeployFacade, DeployOutcome};
use launchpad::errors::LaunchpadError;
use launchpad::http::client::CoolifyClient;
use launchpad::models::deployment::{DeploymentPage, SourceKind};
use secrecy::SecretString;

/// Remote platform stand-in
enum MockApi {
    TriggerOk(&'static str),
    PageJson(&'static str),
    RemoteFailure(u16),
}

#[async_trait]
impl DeployApi for MockApi {
    async fn trigger(&self, _force: bool) -> Result<String, LaunchpadError> {
        match self {
            MockApi::TriggerOk(body) => Ok(body.to_string()),
            MockApi::RemoteFailure(status) => Err(LaunchpadError::RemoteError {
                status: *status,
                body: "service unavailable".to_string(),
            }),
            MockApi::PageJson(_) => panic!("trigger not expected in this test"),
        }
    }

    async fn list_page(&self, _skip: u32, _take: u32) -> Result<DeploymentPage, LaunchpadError> {
        match self {
            MockApi::PageJson(json) => Ok(serde_json::from_str(json).unwrap()),
            MockApi::RemoteFailure(status) => Err(LaunchpadError::RemoteError {
                status: *status,
                body: "service unavailable".to_string(),
            }),
            MockApi::TriggerOk(_) => panic!("list_page not expected in this test"),
        }
    }
}

fn facade(api: MockApi) -> DeployFacade {
    DeployFacade::new(Arc::new(api))
}

#[tokio::test]
async fn test_trigger_success_builds_receipt() {
    let outcome = facade(MockApi::TriggerOk("ok")).trigger_deploy().await;

    match outcome {
        DeployOutcome::Triggered(receipt) => {
            assert!(receipt.success);
            assert_eq!(receipt.message, "Deploy triggered successfully");
            assert_eq!(receipt.response, "ok");
            chrono::DateTime::parse_from_rfc3339(&receipt.timestamp)
                .expect("timestamp should be ISO-8601");
        }
        DeployOutcome::Failed(failure) => panic!("expected success, got {:?}", failure),
    }
}

#[tokio::test]
async fn test_trigger_missing_config_never_reaches_network() {
    // Real client with an empty API URL: the credential check fires before
    // any request is built, so no network is involved.
    let client = CoolifyClient::new(CoolifySettings {
        api_url: String::new(),
        app_uuid: "app-1".to_string(),
        token: SecretString::from("secret".to_string()),
    })
    .unwrap();

    let outcome = DeployFacade::new(Arc::new(client)).trigger_deploy().await;

    match outcome {
        DeployOutcome::Failed(failure) => {
            assert!(!failure.success);
            assert_eq!(failure.error, "trigger_failed");
            assert!(failure.details.contains("COOLIFY_API_URL"));
            assert_eq!(failure.status_hint, None);
        }
        DeployOutcome::Triggered(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_trigger_remote_failure_carries_status_hint() {
    let outcome = facade(MockApi::RemoteFailure(503)).trigger_deploy().await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status_hint(), Some(503));
}

#[tokio::test]
async fn test_list_normalizes_timestamps_and_source_kind() {
    let page_json = r#"{
        "count": 1,
        "deployments": [{
            "id": 1,
            "status": "finished",
            "created_at": "2025-10-31T10:00:00.000000Z",
            "finished_at": "2025-10-31 11:06:08",
            "is_webhook": false,
            "is_api": true
        }]
    }"#;

    let page = facade(MockApi::PageJson(page_json))
        .list_deployments(0, 10)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    let deployment = &page.deployments[0];
    assert_eq!(deployment.created_at, "2025-10-31T10:00:00.000000Z");
    assert_eq!(
        deployment.finished_at.as_deref(),
        Some("2025-10-31T11:06:08.000000Z")
    );
    assert_eq!(deployment.source_kind, SourceKind::Api);
}

#[tokio::test]
async fn test_list_keeps_absent_finished_at() {
    let page_json = r#"{
        "count": 1,
        "deployments": [{
            "id": 2,
            "status": "in_progress",
            "created_at": "2025-10-31 10:00:00",
            "is_webhook": true,
            "is_api": true
        }]
    }"#;

    let page = facade(MockApi::PageJson(page_json))
        .list_deployments(0, 10)
        .await
        .unwrap();

    let deployment = &page.deployments[0];
    // created_at gets the same repair as finished_at
    assert_eq!(deployment.created_at, "2025-10-31T10:00:00.000000Z");
    assert_eq!(deployment.finished_at, None);
    // webhook wins the tie-break when both flags are set
    assert_eq!(deployment.source_kind, SourceKind::Webhook);
}

#[tokio::test]
async fn test_list_propagates_remote_failure() {
    let err = facade(MockApi::RemoteFailure(503))
        .list_deployments(0, 10)
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchpadError::RemoteError { status: 503, .. }));
    assert_eq!(err.http_status(), Some(503));
}
