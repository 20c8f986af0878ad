//! Fixed output shapes the frontend consumes. Raw upstream records are
//! projected into these and every other field is dropped.

use disclosure_api::types::{FilingRecord, HojinInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Securities-report search result row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilingSummary {
    #[serde(rename = "docID")]
    pub doc_id: Option<String>,
    #[serde(rename = "filerName")]
    pub filer_name: Option<String>,
    #[serde(rename = "JCN")]
    pub jcn: Option<String>,
    #[serde(rename = "formCode")]
    pub form_code: Option<String>,
    #[serde(rename = "submitDateTime")]
    pub submit_date_time: Option<String>,
}

impl From<FilingRecord> for FilingSummary {
    fn from(record: FilingRecord) -> Self {
        let jcn = record.corporate_number().map(String::from);
        Self {
            doc_id: record.doc_id,
            filer_name: record.filer_name,
            jcn,
            form_code: record.form_code,
            submit_date_time: record.submit_date_time,
        }
    }
}

/// Document listing row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentSummary {
    #[serde(rename = "docID")]
    pub doc_id: Option<String>,
    #[serde(rename = "filerName")]
    pub filer_name: Option<String>,
    #[serde(rename = "edinetCode")]
    pub edinet_code: Option<String>,
    #[serde(rename = "submitDateTime")]
    pub submit_date_time: Option<String>,
    #[serde(rename = "ordinanceCode")]
    pub ordinance_code: Option<String>,
    #[serde(rename = "formCode")]
    pub form_code: Option<String>,
}

impl From<FilingRecord> for DocumentSummary {
    fn from(record: FilingRecord) -> Self {
        Self {
            doc_id: record.doc_id,
            filer_name: record.filer_name,
            edinet_code: record.edinet_code,
            submit_date_time: record.submit_date_time,
            ordinance_code: record.ordinance_code,
            form_code: record.form_code,
        }
    }
}

/// Relative links to the download route for one filing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DownloadLinks {
    pub zip: String,
    pub pdf: String,
    #[serde(rename = "metaCsv")]
    pub meta_csv: String,
}

impl DownloadLinks {
    pub fn for_doc(doc_id: &str) -> Self {
        Self {
            zip: format!("/edinet/download/{}?type=zip", doc_id),
            pdf: format!("/edinet/download/{}?type=pdf", doc_id),
            meta_csv: format!("/edinet/download/{}?type=meta", doc_id),
        }
    }
}

/// The most recent securities report in a range, with its form name and
/// download links.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LatestReport {
    #[serde(flatten)]
    pub document: DocumentSummary,
    #[serde(rename = "formName")]
    pub form_name: String,
    pub download: DownloadLinks,
}

/// Registry search result row. Values are copied from the hit unchanged;
/// a missing key becomes `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompanySummary {
    pub name: Value,
    pub corporate_number: Value,
    pub established_date: Value,
    pub capital: Value,
    pub employee_number: Value,
    pub address: Value,
    pub business_summary: Value,
    pub homepage: Value,
}

impl From<HojinInfo> for CompanySummary {
    fn from(info: HojinInfo) -> Self {
        let field = |key: &str| info.get(key).cloned().unwrap_or(Value::Null);
        let either = |primary: &str, fallback: &str| {
            info.get(primary)
                .filter(|v| is_present(v))
                .cloned()
                .unwrap_or_else(|| field(fallback))
        };
        Self {
            name: field("name"),
            corporate_number: either("corporate_number", "jcn"),
            established_date: either("established_date", "founding_year"),
            capital: field("capital"),
            employee_number: field("employee_number"),
            address: field("address"),
            business_summary: field("business_summary"),
            homepage: either("url", "homepage"),
        }
    }
}

/// Whether a value counts as set: not null, not an empty string, zero,
/// `false`, or an empty array/object.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
