//! Gateway configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `LMS_GATEWAY_*` environment variables and
//! configuration files. [`GatewaySettings::validate`] turns the raw layer into
//! a [`GatewayConfig`] the bootstrap can use directly.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const REST_PATH: &str = "webservice/rest/server.php";

fn default_user_agent() -> String {
    format!("lms-gateway/{}", env!("CARGO_PKG_VERSION"))
}

/// Raw gateway settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LMS_GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the Moodle site, e.g. `https://lms.example.org`.
    pub moodle_url: Option<String>,
    /// Web service token used for every Moodle call.
    pub moodle_token: Option<String>,
    /// Per-call timeout for Moodle requests, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// User agent sent to Moodle.
    pub user_agent: Option<String>,
}

/// Reasons the settings cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("moodle_url is required")]
    MissingMoodleUrl,
    #[error("moodle_url `{value}` is not a valid URL: {source}")]
    InvalidMoodleUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("moodle_url must use http or https, got `{scheme}`")]
    UnsupportedScheme { scheme: String },
    #[error("moodle_token is required")]
    MissingMoodleToken,
    #[error("bind_addr `{value}` is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validated configuration.
#[derive(Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Moodle REST endpoint derived from the site URL.
    pub endpoint: Url,
    pub token: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("bind_addr", &self.bind_addr)
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GatewaySettings {
    /// Check required values and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a required value is missing or a value
    /// cannot be parsed.
    pub fn validate(&self) -> Result<GatewayConfig, SettingsError> {
        let raw_url =
            non_blank(self.moodle_url.as_deref()).ok_or(SettingsError::MissingMoodleUrl)?;
        let token = non_blank(self.moodle_token.as_deref())
            .ok_or(SettingsError::MissingMoodleToken)?
            .to_owned();
        let timeout_secs = self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        let raw_bind = non_blank(self.bind_addr.as_deref()).unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw_bind
            .parse::<SocketAddr>()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw_bind.to_owned(),
                source,
            })?;

        Ok(GatewayConfig {
            bind_addr,
            endpoint: rest_endpoint(raw_url)?,
            token,
            request_timeout: Duration::from_secs(timeout_secs),
            user_agent: non_blank(self.user_agent.as_deref())
                .map(str::to_owned)
                .unwrap_or_else(default_user_agent),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// `<site>/webservice/rest/server.php`, keeping any sub-path of the site URL.
fn rest_endpoint(site: &str) -> Result<Url, SettingsError> {
    let base = format!("{}/", site.trim_end_matches('/'));
    let parsed = Url::parse(&base).map_err(|source| SettingsError::InvalidMoodleUrl {
        value: site.to_owned(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SettingsError::UnsupportedScheme {
            scheme: parsed.scheme().to_owned(),
        });
    }
    parsed
        .join(REST_PATH)
        .map_err(|source| SettingsError::InvalidMoodleUrl {
            value: site.to_owned(),
            source,
        })
}
