use chrono::NaiveDate;
use url::Url;

use crate::types::{DownloadKind, ListType};

use super::common::Query;

/// Query for `documents.json`: the filings submitted on a single day.
#[derive(Clone, Copy, Debug)]
pub struct DocumentListQuery {
    pub date: NaiveDate,
    pub list_type: ListType,
}

impl Query for DocumentListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("date", &self.date.format("%Y-%m-%d").to_string())
            .append_pair("type", &self.list_type.to_string());
        url
    }
}

impl DocumentListQuery {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            list_type: ListType::default(),
        }
    }

    pub fn with_list_type(mut self, list_type: ListType) -> Self {
        self.list_type = list_type;
        self
    }
}

/// Query for `documents/{docID}`: which rendition of the filing to fetch.
#[derive(Clone, Copy, Debug)]
pub struct DocumentFileQuery {
    pub kind: DownloadKind,
}

impl Query for DocumentFileQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("type", &self.kind.api_type().to_string());
        url
    }
}

impl DocumentFileQuery {
    pub fn new(kind: DownloadKind) -> Self {
        Self { kind }
    }
}
