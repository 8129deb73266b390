//! Deployment orchestration facade
//!
//! The only entry point the inbound API layer talks to. Composes the remote
//! client with display normalization, and owns the error boundary: trigger
//! failures become structured results, listing failures propagate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::error;

use crate::deploy::normalize::{normalize_timestamp, source_kind};
use crate::errors::LaunchpadError;
use crate::http::client::CoolifyClient;
use crate::models::deployment::DeploymentPage;

/// The two outbound operations against the remote deploy platform.
///
/// `CoolifyClient` is the production implementation; tests substitute their
/// own at this seam.
#[async_trait]
pub trait DeployApi: Send + Sync {
    /// Trigger a deployment run, returning the raw response body
    async fn trigger(&self, force: bool) -> Result<String, LaunchpadError>;

    /// Fetch one page of deployment history
    async fn list_page(&self, skip: u32, take: u32) -> Result<DeploymentPage, LaunchpadError>;
}

#[async_trait]
impl DeployApi for CoolifyClient {
    async fn trigger(&self, force: bool) -> Result<String, LaunchpadError> {
        CoolifyClient::trigger(self, force).await
    }

    async fn list_page(&self, skip: u32, take: u32) -> Result<DeploymentPage, LaunchpadError> {
        CoolifyClient::list_page(self, skip, take).await
    }
}

/// Successful trigger receipt
#[derive(Debug, Clone, Serialize)]
pub struct TriggerReceipt {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub response: String,
}

/// Structured trigger failure, always serializable for the inbound layer
#[derive(Debug, Clone, Serialize)]
pub struct TriggerFailure {
    pub success: bool,
    pub error: String,
    pub details: String,

    /// Remote HTTP status when the failure carried one; the inbound layer
    /// falls back to 500 otherwise
    #[serde(skip)]
    pub status_hint: Option<u16>,
}

/// Outcome of a trigger attempt. Never an `Err`: the inbound layer must
/// always have a well-formed body to answer the dashboard with.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DeployOutcome {
    Triggered(TriggerReceipt),
    Failed(TriggerFailure),
}

impl DeployOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeployOutcome::Triggered(_))
    }

    pub fn status_hint(&self) -> Option<u16> {
        match self {
            DeployOutcome::Triggered(_) => None,
            DeployOutcome::Failed(failure) => failure.status_hint,
        }
    }
}

/// Facade over the remote deploy platform
pub struct DeployFacade {
    api: Arc<dyn DeployApi>,
}

impl DeployFacade {
    pub fn new(api: Arc<dyn DeployApi>) -> Self {
        Self { api }
    }

    /// Trigger a deployment run. Every underlying error is converted into a
    /// structured failure result rather than propagated.
    pub async fn trigger_deploy(&self) -> DeployOutcome {
        match self.api.trigger(false).await {
            Ok(body) => DeployOutcome::Triggered(TriggerReceipt {
                success: true,
                message: "Deploy triggered successfully".to_string(),
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                response: body,
            }),
            Err(e) => {
                error!("Failed to trigger deploy: {}", e);
                DeployOutcome::Failed(TriggerFailure {
                    success: false,
                    error: "trigger_failed".to_string(),
                    details: e.to_string(),
                    status_hint: e.http_status(),
                })
            }
        }
    }

    /// Fetch and normalize one page of deployment history.
    ///
    /// Errors propagate: a silently-empty list would hide an outage from an
    /// operator watching a deploy.
    pub async fn list_deployments(
        &self,
        skip: u32,
        take: u32,
    ) -> Result<DeploymentPage, LaunchpadError> {
        let mut page = self.api.list_page(skip, take).await?;

        for deployment in &mut page.deployments {
            deployment.created_at = normalize_timestamp(&deployment.created_at);
            if let Some(finished_at) = deployment.finished_at.take() {
                deployment.finished_at = Some(normalize_timestamp(&finished_at));
            }
            deployment.source_kind = source_kind(deployment.is_webhook, deployment.is_api);
        }

        Ok(page)
    }
}
