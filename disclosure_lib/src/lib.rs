//! Library layer for the disclosure proxy: configuration, input validation,
//! the day-by-day EDINET scan, and the services the HTTP server exposes.
//!
//! Wraps the `disclosure_api` clients with the filtering, projection and
//! envelope rules the frontend expects.

pub mod company;
pub mod config;
pub mod envelope;
pub mod error;
pub mod filings;
pub mod filter;
pub mod scan;
pub mod summary;
pub mod validation;

pub use disclosure_api;
pub use disclosure_api::types;

pub use company::{CompanySearch, CompanyService};
pub use config::Config;
pub use envelope::Envelope;
pub use error::DisclosureError;
pub use filings::{DocumentFile, FilingService};
pub use scan::{DateRange, DayScanner};
pub use summary::{CompanySummary, DocumentSummary, DownloadLinks, FilingSummary, LatestReport};
