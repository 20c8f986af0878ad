//! HTTP client for the gBizINFO corporate registry.

use std::time::Duration;

use url::Url;

use crate::{
    http::{build_client, send_json},
    query::{HojinSearchQuery, Query},
    types::HojinResponse,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://info.gbiz.go.jp/hojin/v1/hojin";

/// HTTP client for the gBizINFO `hojin` API, authenticated with a static token.
pub struct GbizClient {
    /// Base URL for the API. Defaults to `https://info.gbiz.go.jp/hojin/v1/hojin`.
    base_api_url: String,
    api_token: String,
    timeout: Duration,
}

impl GbizClient {
    /// Creates a new client pointing at the production gBizINFO API.
    pub fn new(api_token: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_token)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_token: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(e.to_string())
        })
    }

    async fn get(&self, url: Url) -> Result<HojinResponse, Error> {
        let client = build_client(self.timeout)?;
        let request = client
            .get(url)
            .header("accept", "application/json")
            .header("X-hojinInfo-api-token", &self.api_token);
        send_json(request).await
    }

    /// Searches registered corporations by (partial) name.
    pub async fn search(&self, query: &HojinSearchQuery) -> Result<HojinResponse, Error> {
        let url = query.add_to_url(&self.base_url()?);
        self.get(url).await
    }

    /// Looks up a corporation by its 13-digit corporate number.
    pub async fn get_by_corporate_number(
        &self,
        corporate_number: &str,
    ) -> Result<HojinResponse, Error> {
        let mut url = self.base_url()?;
        url.path_segments_mut()
            .map_err(|_| Error::RequestFailed(format!("cannot extend {}", self.base_api_url)))?
            .push(corporate_number);
        self.get(url).await
    }
}
