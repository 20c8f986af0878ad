//! CSV rendering and file-attachment responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use disclosure_lib::DateRange;
use serde::Serialize;

pub const CSV_MEDIA_TYPE: &str = "text/csv; charset=utf-8";

/// Column order of the securities-report search CSV.
pub const FILING_COLUMNS: [&str; 5] = ["docID", "filerName", "JCN", "formCode", "submitDateTime"];

/// Column order of the document listing CSV.
pub const DOCUMENT_COLUMNS: [&str; 6] = [
    "docID",
    "filerName",
    "edinetCode",
    "submitDateTime",
    "ordinanceCode",
    "formCode",
];

/// Renders `rows` as CSV. The header is always written, so an empty
/// result still yields a header line.
pub fn render_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(columns)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// A 200 response that the browser saves as `file_name`.
pub fn attachment(media_type: &str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

pub fn list_csv_file_name(range: &DateRange, doc_type: i64) -> String {
    format!("edinet_list_{}_{}_t{}.csv", range.start(), range.end(), doc_type)
}

pub fn yuho_csv_file_name(range: &DateRange) -> String {
    format!("yuho_search_{}_{}.csv", range.start(), range.end())
}
