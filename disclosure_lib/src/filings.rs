//! EDINET-backed operations: securities-report search, document listing,
//! latest-report lookup and document download.

use std::time::Duration;

use disclosure_api::types::DownloadKind;
use disclosure_api::EdinetClient;

use crate::config::Config;
use crate::envelope::{recent_first, Envelope};
use crate::error::DisclosureError;
use crate::filter::{form_name, is_securities_report, CompanyNameFilter, CorporateNumberMatcher};
use crate::scan::DayScanner;
use crate::summary::{DocumentSummary, DownloadLinks, FilingSummary, LatestReport};
use crate::validation::{
    validate_company_filter, validate_corporate_number, validate_date_range, validate_doc_id,
    validate_download_kind, validate_limit, validate_list_type, MAX_SCAN_LIMIT,
};

/// Upper bound on rows scanned when looking for the latest report.
const LATEST_REPORT_SCAN_LIMIT: usize = 5000;

/// A downloaded filing rendition, ready to be streamed back.
#[derive(Debug)]
pub struct DocumentFile {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub file_name: String,
}

/// Operations over the EDINET disclosure API.
pub struct FilingService {
    client: EdinetClient,
    pause: Duration,
}

impl FilingService {
    /// Builds the service from configuration. Fails when `EDINET_API_KEY` is unset.
    pub fn from_config(config: &Config) -> Result<Self, DisclosureError> {
        let client = EdinetClient::with_base_url(&config.edinet_base_url, config.edinet_api_key()?)
            .with_timeout(config.request_timeout)
            .with_download_timeout(config.download_timeout);
        Ok(Self::new(client, config.scan_pause))
    }

    pub fn new(client: EdinetClient, pause: Duration) -> Self {
        Self { client, pause }
    }

    /// Securities reports (forms 030000/030001) filed in `[start_date, end_date]`
    /// by the corporation `corporate_number`, newest first.
    ///
    /// The result is truncated to `limit` in scan order before it is sorted,
    /// so a long range yields the earliest `limit` matches, presented newest first.
    pub async fn search_securities_reports(
        &self,
        start_date: &str,
        end_date: &str,
        corporate_number: &str,
        limit: i64,
    ) -> Result<Envelope<FilingSummary>, DisclosureError> {
        let range = validate_date_range(start_date, end_date)?;
        let corporate_number = validate_corporate_number(corporate_number)?;
        let limit = validate_limit(limit, MAX_SCAN_LIMIT)?;

        tracing::info!(
            "Searching securities reports for {} from {} to {} (limit {})",
            corporate_number,
            range.start(),
            range.end(),
            limit
        );

        let matcher = CorporateNumberMatcher::new(&corporate_number);
        let rows = DayScanner::new(&self.client, self.pause)
            .scan(&range, limit, |record| {
                is_securities_report(record) && matcher.matches(record)
            })
            .await?;

        let items = rows.into_iter().map(FilingSummary::from).collect();
        Ok(recent_first(items, limit))
    }

    /// Every filing in `[start_date, end_date]`, optionally narrowed to filers
    /// whose name contains `company`, in scan order.
    pub async fn list_documents(
        &self,
        start_date: &str,
        end_date: &str,
        doc_type: i64,
        company: &str,
        limit: i64,
    ) -> Result<Envelope<DocumentSummary>, DisclosureError> {
        let range = validate_date_range(start_date, end_date)?;
        let list_type = validate_list_type(doc_type)?;
        let company = validate_company_filter(company)?;
        let limit = validate_limit(limit, MAX_SCAN_LIMIT)?;

        tracing::info!(
            "Listing documents from {} to {} (type {}, company '{}', limit {})",
            range.start(),
            range.end(),
            list_type,
            company,
            limit
        );

        let filter = CompanyNameFilter::new(&company);
        let rows = DayScanner::new(&self.client, self.pause)
            .with_list_type(list_type)
            .scan(&range, limit, |record| filter.matches(record))
            .await?;

        let items = rows.into_iter().map(DocumentSummary::from).collect();
        Ok(Envelope::truncated(items, limit))
    }

    /// The most recently submitted securities report in the range.
    pub async fn latest_securities_report(
        &self,
        start_date: &str,
        end_date: &str,
        company: &str,
        doc_type: i64,
    ) -> Result<LatestReport, DisclosureError> {
        let listing = self
            .list_documents(
                start_date,
                end_date,
                doc_type,
                company,
                LATEST_REPORT_SCAN_LIMIT as i64,
            )
            .await?;

        // max_by keeps the last maximum; iterate in reverse so the
        // earliest-listed report wins ties.
        let latest = listing
            .items
            .into_iter()
            .rev()
            .filter(|doc| {
                doc.form_code
                    .as_deref()
                    .is_some_and(|code| form_name(code).is_some())
            })
            .max_by(|a, b| {
                let a = a.submit_date_time.as_deref().unwrap_or_default();
                let b = b.submit_date_time.as_deref().unwrap_or_default();
                a.cmp(b)
            })
            .ok_or_else(|| {
                DisclosureError::NotFound(
                    "no securities report was found in the requested period".to_string(),
                )
            })?;

        let form_name = latest
            .form_code
            .as_deref()
            .and_then(form_name)
            .unwrap_or_default()
            .to_string();
        let download = DownloadLinks::for_doc(latest.doc_id.as_deref().unwrap_or_default());
        Ok(LatestReport {
            document: latest,
            form_name,
            download,
        })
    }

    /// Fetches one rendition (`zip`, `pdf` or `meta`) of a filing.
    pub async fn download(&self, doc_id: &str, kind: &str) -> Result<DocumentFile, DisclosureError> {
        let doc_id = validate_doc_id(doc_id)?;
        let kind: DownloadKind = validate_download_kind(kind)?;

        tracing::info!("Downloading {} as {}", doc_id, kind);
        let bytes = self.client.download_document(&doc_id, kind).await?;
        Ok(DocumentFile {
            bytes,
            media_type: kind.media_type(),
            file_name: kind.file_name(&doc_id),
        })
    }
}
