use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response body of `documents.json`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DocumentList {
    pub metadata: Option<Metadata>,
    results: Option<Vec<FilingRecord>>,
}

impl DocumentList {
    /// The day's filings. A missing or null `results` array is an empty day.
    pub fn into_results(self) -> Vec<FilingRecord> {
        self.results.unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: Option<String>,
    pub resultset: Option<ResultSet>,
    pub process_date_time: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ResultSet {
    pub count: i64,
}

/// One filing as listed by EDINET. Every field is optional on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilingRecord {
    pub seq_number: Option<i64>,

    #[serde(rename = "docID")]
    pub doc_id: Option<String>,

    pub edinet_code: Option<String>,

    pub sec_code: Option<String>,

    #[serde(rename = "JCN", skip_serializing_if = "Option::is_none")]
    pub jcn_upper: Option<String>,

    #[serde(rename = "jcn", skip_serializing_if = "Option::is_none")]
    pub jcn_lower: Option<String>,

    pub filer_name: Option<String>,

    pub ordinance_code: Option<String>,

    pub form_code: Option<String>,

    pub doc_type_code: Option<String>,

    pub period_start: Option<String>,

    pub period_end: Option<String>,

    pub submit_date_time: Option<String>,

    pub doc_description: Option<String>,
}

impl FilingRecord {
    /// Corporate number as published, from `JCN` or else `jcn`.
    /// Empty strings count as absent.
    pub fn corporate_number(&self) -> Option<&str> {
        [self.jcn_upper.as_deref(), self.jcn_lower.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

/// The `type` parameter of `documents.json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListType {
    /// Metadata only.
    Metadata = 1,
    /// Metadata plus the list of submitted documents.
    #[default]
    Documents = 2,
}
impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
impl TryFrom<i64> for ListType {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ListType::Metadata),
            2 => Ok(ListType::Documents),
            _ => Err(()),
        }
    }
}

/// Rendition of a filing served by `documents/{docID}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    Zip,
    Pdf,
    Meta,
}

impl DownloadKind {
    /// Value of the upstream `type` parameter.
    pub fn api_type(&self) -> u8 {
        match self {
            DownloadKind::Zip => 1,
            DownloadKind::Pdf => 2,
            DownloadKind::Meta => 3,
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            DownloadKind::Zip => "application/zip",
            DownloadKind::Pdf => "application/pdf",
            DownloadKind::Meta => "text/csv; charset=utf-8",
        }
    }

    pub fn file_name(&self, doc_id: &str) -> String {
        match self {
            DownloadKind::Zip => format!("{}.zip", doc_id),
            DownloadKind::Pdf => format!("{}.pdf", doc_id),
            DownloadKind::Meta => format!("{}_meta.csv", doc_id),
        }
    }
}
impl std::fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DownloadKind::Zip => "zip",
                DownloadKind::Pdf => "pdf",
                DownloadKind::Meta => "meta",
            }
        )
    }
}
impl FromStr for DownloadKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zip" => Ok(DownloadKind::Zip),
            "pdf" => Ok(DownloadKind::Pdf),
            "meta" => Ok(DownloadKind::Meta),
            _ => Err(()),
        }
    }
}
