//! Normalization of raw deployment data for display
//!
//! Everything here is a pure total function. Malformed input degrades to a
//! passthrough or a neutral default, never an error; the dashboard has to
//! keep rendering whatever the remote platform sends.

use serde::{Deserialize, Serialize};

use crate::models::deployment::{DeploymentStatus, SourceKind};

/// Display color token for a deployment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusColor {
    Success,
    Danger,
    Warning,
    NeutralEmphasis,
    Neutral,
}

/// Repair the remote platform's inconsistent timestamp encoding.
///
/// Coolify emits `created_at` as ISO-8601 but `finished_at` sometimes as
/// `YYYY-MM-DD HH:MM:SS` with no timezone marker. Exactly that pattern is
/// rewritten to `YYYY-MM-DDTHH:MM:SS.000000Z`; anything else (already ISO,
/// empty, garbage) passes through unchanged. Idempotent.
pub fn normalize_timestamp(raw: &str) -> String {
    if !is_bare_datetime(raw) {
        return raw.to_string();
    }
    format!("{}.000000Z", raw.replacen(' ', "T", 1))
}

/// Exact match for `YYYY-MM-DD HH:MM:SS`
fn is_bare_datetime(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

/// Resolve a display label for a raw status string.
///
/// The lookup is keyed by the normalized status (lower-case, hyphens folded
/// to underscores); the raw status itself is the fallback when no
/// translation exists.
pub fn status_label<F>(status: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let key = status.to_lowercase().replace('-', "_");
    lookup(&key).unwrap_or_else(|| status.to_string())
}

/// Map a raw status string to its display color. Total: unrecognized
/// statuses fall back to neutral.
pub fn status_color(status: &str) -> StatusColor {
    match DeploymentStatus::from_raw(status) {
        DeploymentStatus::Finished => StatusColor::Success,
        DeploymentStatus::Failed => StatusColor::Danger,
        DeploymentStatus::InProgress => StatusColor::Warning,
        DeploymentStatus::Queued => StatusColor::NeutralEmphasis,
        DeploymentStatus::CancelledByUser => StatusColor::Neutral,
        DeploymentStatus::Other(_) => StatusColor::Neutral,
    }
}

/// Classify what initiated a deployment. Webhook takes precedence over API
/// when the remote sets both flags; this tie-break mirrors the platform's
/// own (undocumented) behavior and must not be "improved".
pub fn source_kind(is_webhook: bool, is_api: bool) -> SourceKind {
    if is_webhook {
        SourceKind::Webhook
    } else if is_api {
        SourceKind::Api
    } else {
        SourceKind::Manual
    }
}
