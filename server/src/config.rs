//! Service settings, loaded once from the environment at process start

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::logs::LogLevel;

/// Service settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Log level
    pub log_level: LogLevel,

    /// Remote deploy platform credentials
    pub coolify: CoolifySettings,

    /// Local HTTP server
    pub server: ServerSettings,

    /// Enable the background deployment poller
    pub enable_poller: bool,

    /// Polling interval in seconds
    pub poll_interval_secs: u64,
}

impl Settings {
    /// Read settings from environment variables, falling back to defaults.
    /// Credential values may load empty; they are validated per outbound
    /// call so a misconfigured install still serves the dashboard.
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LAUNCHPAD_LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            coolify: CoolifySettings::from_env(),
            server: ServerSettings::from_env(),
            enable_poller: env::var("LAUNCHPAD_ENABLE_POLLER")
                .map(|s| s != "false" && s != "0")
                .unwrap_or(true),
            poll_interval_secs: env::var("LAUNCHPAD_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            coolify: CoolifySettings::default(),
            server: ServerSettings::default(),
            enable_poller: true,
            poll_interval_secs: 30,
        }
    }
}

/// Credentials for the remote Coolify instance
#[derive(Debug, Clone)]
pub struct CoolifySettings {
    /// Base URL of the Coolify API
    pub api_url: String,

    /// UUID of the application to deploy
    pub app_uuid: String,

    /// Bearer token for the Coolify API
    pub token: SecretString,
}

impl CoolifySettings {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("COOLIFY_API_URL").unwrap_or_default(),
            app_uuid: env::var("COOLIFY_APP_UUID").unwrap_or_default(),
            token: SecretString::from(env::var("COOLIFY_TOKEN").unwrap_or_default()),
        }
    }
}

impl Default for CoolifySettings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            app_uuid: String::new(),
            token: SecretString::from(String::new()),
        }
    }
}

/// Local HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("LAUNCHPAD_HOST").unwrap_or(defaults.host),
            port: env::var("LAUNCHPAD_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
