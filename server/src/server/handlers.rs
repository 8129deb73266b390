//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::LaunchpadError;
use crate::server::state::ServerState;
use crate::utils::version_info;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "launchpad".to_string(),
        version: version.version,
    })
}

/// Version response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    let version = version_info();
    Json(VersionResponse {
        version: version.version,
        git_hash: version.git_hash,
        build_time: version.build_time,
    })
}

/// Error body for failed operations
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

fn error_status(err: &LaunchpadError) -> StatusCode {
    err.http_status()
        .and_then(|status| StatusCode::from_u16(status).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Trigger-deploy handler. The facade never errors here; failures arrive as
/// a structured body, and only the HTTP status is decided at this layer.
pub async fn deploy_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let outcome = state.facade.trigger_deploy().await;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        outcome
            .status_hint()
            .and_then(|hint| StatusCode::from_u16(hint).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    };

    (status, Json(outcome))
}

/// Query parameters for the deployment list. Values are taken as raw
/// strings so an unparsable value falls back to the default instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct DeploymentsQuery {
    pub skip: Option<String>,
    pub take: Option<String>,
}

impl DeploymentsQuery {
    pub fn skip(&self) -> u32 {
        self.skip
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    /// Zero is treated as unset: a page of nothing is never what the
    /// dashboard wants.
    pub fn take(&self) -> u32 {
        self.take
            .as_deref()
            .and_then(|s| s.parse().ok())
            .filter(|take| *take > 0)
            .unwrap_or(10)
    }
}

/// Deployment-list handler. Listing failures are reported, not hidden
/// behind an empty list.
pub async fn deployments_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DeploymentsQuery>,
) -> impl IntoResponse {
    match state.facade.list_deployments(query.skip(), query.take()).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => {
            error!("List deployments handler error: {}", e);
            (
                error_status(&e),
                Json(ErrorResponse {
                    success: false,
                    error: "Failed to fetch deployments".to_string(),
                    details: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = DeploymentsQuery {
            skip: None,
            take: None,
        };
        assert_eq!(query.skip(), 0);
        assert_eq!(query.take(), 10);
    }

    #[test]
    fn test_query_invalid_values_fall_back() {
        let query = DeploymentsQuery {
            skip: Some("abc".to_string()),
            take: Some("0".to_string()),
        };
        assert_eq!(query.skip(), 0);
        assert_eq!(query.take(), 10);
    }

    #[test]
    fn test_query_parses_values() {
        let query = DeploymentsQuery {
            skip: Some("20".to_string()),
            take: Some("5".to_string()),
        };
        assert_eq!(query.skip(), 20);
        assert_eq!(query.take(), 5);
    }
}
