use url::Url;

use super::common::Query;

/// Name search against the gBizINFO `hojin` endpoint.
#[derive(Clone, Debug, Default)]
pub struct HojinSearchQuery {
    pub name: String,
    pub limit: Option<u32>,
}

impl Query for HojinSearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("name", &self.name);
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }
}

impl HojinSearchQuery {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
