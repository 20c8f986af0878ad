//! HTTP client for the EDINET v2 disclosure API.

use std::time::Duration;

use url::Url;

use crate::{
    http::{build_client, send, send_json},
    query::{DocumentFileQuery, DocumentListQuery, Query},
    types::{DocumentList, DownloadKind},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://disclosure.edinet-fsa.go.jp/api/v2";
const USER_AGENT: &str = "edinet-client/1.0";

/// HTTP client for the EDINET v2 disclosure API.
///
/// Every request carries the subscription key header and builds a fresh
/// `reqwest::Client`; nothing is pooled between calls.
pub struct EdinetClient {
    /// Base URL for the API. Defaults to `https://disclosure.edinet-fsa.go.jp/api/v2`.
    base_api_url: String,
    api_key: String,
    timeout: Duration,
    download_timeout: Duration,
}

impl EdinetClient {
    /// Creates a new client pointing at the production EDINET API.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(30),
            download_timeout: Duration::from_secs(60),
        }
    }

    /// Timeout for listing calls. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout for document downloads. Defaults to 60 seconds.
    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        Ok(query.add_to_url(&url))
    }

    fn request(&self, url: Url, timeout: Duration) -> Result<reqwest::RequestBuilder, Error> {
        let client = build_client(timeout)?;
        Ok(client
            .get(url)
            .header("accept", "application/json")
            .header("user-agent", USER_AGENT)
            .header("Ocp-Apim-Subscription-Key", &self.api_key))
    }

    /// Fetches the filings submitted on `query.date`.
    pub async fn list_documents(&self, query: &DocumentListQuery) -> Result<DocumentList, Error> {
        let url = self.get_url("/documents.json", query)?;
        send_json(self.request(url, self.timeout)?).await
    }

    /// Downloads one rendition of a filing as raw bytes.
    pub async fn download_document(
        &self,
        doc_id: &str,
        kind: DownloadKind,
    ) -> Result<Vec<u8>, Error> {
        let url = self.get_url(
            format!("/documents/{}", doc_id).as_str(),
            &DocumentFileQuery::new(kind),
        )?;
        send(self.request(url, self.download_timeout)?).await
    }
}
