//! Deployment models
//!
//! Deployments are owned by the remote Coolify instance and mirrored here
//! read-only. Only `id` and `status` are structurally required; everything
//! else defaults so a sparse or malformed response row still renders.

use serde::{Deserialize, Serialize};

/// A single deployment run as reported by the remote platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    /// Remote identifier, unique per deployment run
    pub id: i64,

    /// Raw status string. Unknown values pass through untouched; parse
    /// with [`DeploymentStatus::from_raw`] for display decisions.
    pub status: String,

    #[serde(default)]
    pub deployment_uuid: String,

    #[serde(default)]
    pub commit: String,

    #[serde(default)]
    pub commit_message: String,

    #[serde(default)]
    pub created_at: String,

    /// Absent while the deployment is still queued or in progress
    #[serde(default)]
    pub finished_at: Option<String>,

    #[serde(default)]
    pub is_webhook: bool,

    #[serde(default)]
    pub is_api: bool,

    #[serde(default)]
    pub application_name: String,

    #[serde(default)]
    pub server_name: String,

    #[serde(default)]
    pub deployment_url: String,

    /// Derived during normalization, never present on the wire
    #[serde(default, skip_deserializing)]
    pub source_kind: SourceKind,
}

/// One page of deployment history, in the order the remote returned it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentPage {
    pub count: i64,

    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

/// Parsed view of the raw status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStatus {
    Queued,
    InProgress,
    Finished,
    Failed,
    CancelledByUser,
    /// Unrecognized status, kept verbatim
    Other(String),
}

impl DeploymentStatus {
    /// Parse a raw status. Coolify is inconsistent about separators
    /// ("cancelled-by-user" vs "in_progress"), so hyphens fold to
    /// underscores before matching.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_lowercase().replace('-', "_").as_str() {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "finished" => Self::Finished,
            "failed" => Self::Failed,
            "cancelled_by_user" => Self::CancelledByUser,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Normalized key used for translation lookups
    pub fn as_key(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::CancelledByUser => "cancelled_by_user",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// What initiated a deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Webhook,
    Api,
    #[default]
    Manual,
}
