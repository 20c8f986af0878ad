//! gBizINFO-backed operations: registry search by name and lookup by number.

use disclosure_api::types::HojinInfo;
use disclosure_api::{GbizClient, HojinSearchQuery};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::DisclosureError;
use crate::summary::CompanySummary;
use crate::validation::{
    validate_company_name, validate_limit, validate_registry_number, MAX_COMPANY_SEARCH_LIMIT,
};

/// Registry search response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompanySearch {
    pub count: usize,
    pub results: Vec<CompanySummary>,
}

/// Operations over the gBizINFO corporate registry.
pub struct CompanyService {
    client: GbizClient,
}

impl CompanyService {
    /// Builds the service from configuration. Fails when `GBIZINFO_API_TOKEN` is unset.
    pub fn from_config(config: &Config) -> Result<Self, DisclosureError> {
        let client =
            GbizClient::with_base_url(&config.gbizinfo_base_url, config.gbizinfo_api_token()?)
                .with_timeout(config.request_timeout);
        Ok(Self::new(client))
    }

    pub fn new(client: GbizClient) -> Self {
        Self { client }
    }

    /// Corporations whose registered name matches `name`, at most `limit`
    /// as returned by the registry.
    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
    ) -> Result<CompanySearch, DisclosureError> {
        let name = validate_company_name(name)?;
        let limit = validate_limit(limit, MAX_COMPANY_SEARCH_LIMIT)?;

        tracing::info!("Searching registry for '{}' (limit {})", name, limit);
        let query = HojinSearchQuery::new(&name).with_limit(limit as u32);
        let hits = self.client.search(&query).await?.into_hits();
        if hits.is_empty() {
            return Err(DisclosureError::NotFound(format!(
                "no company matches the name '{}'",
                name
            )));
        }

        let results: Vec<CompanySummary> = hits.into_iter().map(CompanySummary::from).collect();
        Ok(CompanySearch {
            count: results.len(),
            results,
        })
    }

    /// The registry entry for a 13-digit corporate number, passed on whole.
    pub async fn detail(&self, corporate_number: &str) -> Result<HojinInfo, DisclosureError> {
        let corporate_number = validate_registry_number(corporate_number)?;

        tracing::info!("Looking up corporate number {}", corporate_number);
        self.client
            .get_by_corporate_number(&corporate_number)
            .await?
            .into_hits()
            .into_iter()
            .next()
            .ok_or_else(|| {
                DisclosureError::NotFound(format!(
                    "no company is registered under corporate number {}",
                    corporate_number
                ))
            })
    }
}
