use chrono::NaiveDate;
use disclosure_api::types::{DownloadKind, ListType};
use disclosure_api::{DocumentFileQuery, DocumentListQuery, HojinSearchQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/documents.json").unwrap()
}

#[test]
fn document_list_query_defaults() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let url = DocumentListQuery::new(date).add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("date=2025-06-30"));
    assert!(query.contains("type=2"));
}

#[test]
fn document_list_query_metadata_only() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let url = DocumentListQuery::new(date)
        .with_list_type(ListType::Metadata)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("date=2025-01-05"));
    assert!(query.contains("type=1"));
}

#[test]
fn document_file_query_types() {
    for (kind, expected) in [
        (DownloadKind::Zip, "type=1"),
        (DownloadKind::Pdf, "type=2"),
        (DownloadKind::Meta, "type=3"),
    ] {
        let url = DocumentFileQuery::new(kind).add_to_url(&base_url());
        assert_eq!(url.query(), Some(expected));
    }
}

#[test]
fn hojin_search_query_without_limit() {
    let url = HojinSearchQuery::new("ソニー").add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.starts_with("name="));
    assert!(!query.contains("limit"));
}
