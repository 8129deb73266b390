//! HTTP client for the Coolify API

use reqwest::{header, Client};
use secrecy::ExposeSecret;
use tracing::{debug, error};
use url::Url;

use crate::config::CoolifySettings;
use crate::errors::LaunchpadError;
use crate::models::deployment::DeploymentPage;

/// Client for the remote Coolify instance.
///
/// Each method performs exactly one outbound request; retry policy, if any,
/// belongs to the caller.
pub struct CoolifyClient {
    client: Client,
    settings: CoolifySettings,
}

impl CoolifyClient {
    /// Create a new client. Credentials are not validated here; every call
    /// checks them first so a misconfigured install fails fast without a
    /// network attempt.
    pub fn new(mut settings: CoolifySettings) -> Result<Self, LaunchpadError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        settings.api_url = settings.api_url.trim_end_matches('/').to_string();

        Ok(Self { client, settings })
    }

    pub fn api_url(&self) -> &str {
        &self.settings.api_url
    }

    /// Fail with a configuration error naming the first missing setting.
    fn require_credentials(&self) -> Result<(), LaunchpadError> {
        if self.settings.api_url.is_empty() {
            return Err(LaunchpadError::ConfigError(
                "Coolify API URL is not configured. Please set the COOLIFY_API_URL environment variable.".to_string(),
            ));
        }
        if self.settings.app_uuid.is_empty() {
            return Err(LaunchpadError::ConfigError(
                "Coolify application UUID is not configured. Please set the COOLIFY_APP_UUID environment variable.".to_string(),
            ));
        }
        if self.settings.token.expose_secret().is_empty() {
            return Err(LaunchpadError::ConfigError(
                "Coolify token is not configured. Please set the COOLIFY_TOKEN environment variable.".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an endpoint URL under the configured base, with query
    /// parameters properly encoded.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, LaunchpadError> {
        Url::parse_with_params(&format!("{}{}", self.settings.api_url, path), params)
            .map_err(|e| LaunchpadError::ConfigError(format!("Invalid Coolify API URL: {}", e)))
    }

    async fn get_raw(&self, url: Url) -> Result<reqwest::Response, LaunchpadError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.settings.token.expose_secret()),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("Coolify request failed: {} - {}", status, body);
            return Err(LaunchpadError::RemoteError { status, body });
        }

        Ok(response)
    }

    /// Trigger a deployment run. Returns the raw response body.
    pub async fn trigger(&self, force: bool) -> Result<String, LaunchpadError> {
        self.require_credentials()?;

        let url = self.endpoint(
            "/deploy",
            &[
                ("uuid", self.settings.app_uuid.as_str()),
                ("force", if force { "true" } else { "false" }),
            ],
        )?;

        let response = self.get_raw(url).await?;
        let body = response.text().await?;
        Ok(body)
    }

    /// Fetch one page of deployment history for the configured application.
    pub async fn list_page(&self, skip: u32, take: u32) -> Result<DeploymentPage, LaunchpadError> {
        self.require_credentials()?;

        let url = self.endpoint(
            &format!("/deployments/applications/{}", self.settings.app_uuid),
            &[
                ("skip", skip.to_string().as_str()),
                ("take", take.to_string().as_str()),
            ],
        )?;

        let response = self.get_raw(url).await?;
        let body = response.text().await?;
        let page: DeploymentPage = serde_json::from_str(&body)
            .map_err(|e| LaunchpadError::MalformedResponse(e.to_string()))?;
        Ok(page)
    }
}
