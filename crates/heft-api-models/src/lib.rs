#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Heft public API.
//!
//! The settings endpoint is a flat string map; the keys and fallback values
//! the UI derives size thresholds from are pinned here so the server and the
//! front-end agree on a single contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path of the settings endpoint, relative to the API base URL.
pub const SETTINGS_PATH: &str = "/v1/settings";

/// Settings key holding the warning threshold, in megabytes.
pub const SIZE_WARNING_MB_KEY: &str = "size_warning_mb";
/// Settings key holding the danger threshold, in megabytes.
pub const SIZE_DANGER_MB_KEY: &str = "size_danger_mb";
/// Settings key holding the blocked threshold, in megabytes.
pub const SIZE_BLOCKED_MB_KEY: &str = "size_blocked_mb";

/// Warning threshold applied when the server value is missing or unusable.
pub const DEFAULT_SIZE_WARNING_MB: f64 = 50.0;
/// Danger threshold applied when the server value is missing or unusable.
pub const DEFAULT_SIZE_DANGER_MB: f64 = 100.0;
/// Blocked threshold applied when the server value is missing or unusable.
pub const DEFAULT_SIZE_BLOCKED_MB: f64 = 250.0;

/// Response body of `GET /v1/settings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsResponse {
    /// Raw key/value configuration as stored by the server.
    pub settings: BTreeMap<String, String>,
}

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Most specific human-readable message carried by the document.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_response_decodes_string_map() {
        let body = r#"{"settings":{"size_warning_mb":"10","theme":"dark"}}"#;
        let decoded: SettingsResponse = serde_json::from_str(body).expect("decode");
        assert_eq!(decoded.settings.len(), 2);
        assert_eq!(
            decoded.settings.get(SIZE_WARNING_MB_KEY).map(String::as_str),
            Some("10")
        );
    }

    #[test]
    fn settings_response_requires_settings_field() {
        let result = serde_json::from_str::<SettingsResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn settings_response_rejects_non_string_values() {
        let result = serde_json::from_str::<SettingsResponse>(r#"{"settings":{"a":1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn problem_details_prefers_detail_over_title() {
        let body = r#"{"type":"about:blank","title":"Unauthorized","status":401,"detail":"api key expired"}"#;
        let problem: ProblemDetails = serde_json::from_str(body).expect("decode");
        assert_eq!(problem.message(), "api key expired");

        let bare: ProblemDetails =
            serde_json::from_str(r#"{"type":"about:blank","title":"Not Found","status":404}"#)
                .expect("decode");
        assert_eq!(bare.message(), "Not Found");
    }

    #[test]
    fn default_thresholds_are_positive() {
        for value in [
            DEFAULT_SIZE_WARNING_MB,
            DEFAULT_SIZE_DANGER_MB,
            DEFAULT_SIZE_BLOCKED_MB,
        ] {
            assert!(value > 0.0);
        }
    }
}
