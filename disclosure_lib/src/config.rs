//! Process configuration, read once at startup from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `EDINET_API_KEY` | required by [`FilingService`](crate::FilingService) |
//! | `GBIZINFO_API_TOKEN` | required by [`CompanyService`](crate::CompanyService) |
//! | `EDINET_BASE_URL` | `https://disclosure.edinet-fsa.go.jp/api/v2` |
//! | `GBIZINFO_BASE_URL` | `https://info.gbiz.go.jp/hojin/v1/hojin` |
//! | `EDINET_SCAN_PAUSE_MS` | `120` |
//! | `UPSTREAM_TIMEOUT_SECS` | `30` |
//! | `DOWNLOAD_TIMEOUT_SECS` | `60` |
//! | `BIND_ADDR` | `0.0.0.0:8000` |
//! | `CORS_ALLOW_ORIGINS` | `*` (comma separated list) |

use std::time::Duration;

use crate::error::DisclosureError;

pub const DEFAULT_EDINET_BASE_URL: &str = "https://disclosure.edinet-fsa.go.jp/api/v2";
pub const DEFAULT_GBIZINFO_BASE_URL: &str = "https://info.gbiz.go.jp/hojin/v1/hojin";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Clone)]
pub struct Config {
    pub edinet_api_key: Option<String>,
    pub edinet_base_url: String,
    pub gbizinfo_api_token: Option<String>,
    pub gbizinfo_base_url: String,
    /// Pause between consecutive per-day listing calls.
    pub scan_pause: Duration,
    pub request_timeout: Duration,
    pub download_timeout: Duration,
    pub bind_addr: String,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_allow_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edinet_api_key: None,
            edinet_base_url: DEFAULT_EDINET_BASE_URL.to_string(),
            gbizinfo_api_token: None,
            gbizinfo_base_url: DEFAULT_GBIZINFO_BASE_URL.to_string(),
            scan_pause: Duration::from_millis(120),
            request_timeout: Duration::from_secs(30),
            download_timeout: Duration::from_secs(60),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_allow_origins: vec!["*".to_string()],
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("edinet_api_key", &self.edinet_api_key.as_ref().map(|_| "***"))
            .field("edinet_base_url", &self.edinet_base_url)
            .field("gbizinfo_api_token", &self.gbizinfo_api_token.as_ref().map(|_| "***"))
            .field("gbizinfo_base_url", &self.gbizinfo_base_url)
            .field("scan_pause", &self.scan_pause)
            .field("request_timeout", &self.request_timeout)
            .field("download_timeout", &self.download_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("cors_allow_origins", &self.cors_allow_origins)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, DisclosureError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DisclosureError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            edinet_api_key: non_blank("EDINET_API_KEY"),
            edinet_base_url: non_blank("EDINET_BASE_URL").unwrap_or(defaults.edinet_base_url),
            gbizinfo_api_token: non_blank("GBIZINFO_API_TOKEN"),
            gbizinfo_base_url: non_blank("GBIZINFO_BASE_URL")
                .unwrap_or(defaults.gbizinfo_base_url),
            scan_pause: env_duration(
                &non_blank,
                "EDINET_SCAN_PAUSE_MS",
                defaults.scan_pause,
                Duration::from_millis,
            )?,
            request_timeout: env_duration(
                &non_blank,
                "UPSTREAM_TIMEOUT_SECS",
                defaults.request_timeout,
                Duration::from_secs,
            )?,
            download_timeout: env_duration(
                &non_blank,
                "DOWNLOAD_TIMEOUT_SECS",
                defaults.download_timeout,
                Duration::from_secs,
            )?,
            bind_addr: non_blank("BIND_ADDR").unwrap_or(defaults.bind_addr),
            cors_allow_origins: non_blank("CORS_ALLOW_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_allow_origins),
        })
    }

    /// The EDINET subscription key, or a configuration error when unset.
    pub fn edinet_api_key(&self) -> Result<&str, DisclosureError> {
        self.edinet_api_key.as_deref().ok_or_else(|| {
            DisclosureError::Configuration("environment variable EDINET_API_KEY is not set".into())
        })
    }

    /// The gBizINFO API token, or a configuration error when unset.
    pub fn gbizinfo_api_token(&self) -> Result<&str, DisclosureError> {
        self.gbizinfo_api_token.as_deref().ok_or_else(|| {
            DisclosureError::Configuration(
                "environment variable GBIZINFO_API_TOKEN is not set".into(),
            )
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }
}

fn env_duration<L>(
    lookup: &L,
    name: &str,
    default: Duration,
    unit: fn(u64) -> Duration,
) -> Result<Duration, DisclosureError>
where
    L: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.parse::<u64>().map(unit).map_err(|_| {
            DisclosureError::Configuration(format!(
                "{} must be a non-negative integer, got '{}'",
                name, raw
            ))
        }),
    }
}
