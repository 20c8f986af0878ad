//! `/edinet/*` handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use disclosure_lib::validation::validate_date_range;
use disclosure_lib::{DocumentSummary, Envelope, FilingSummary, LatestReport};
use serde::Deserialize;

use crate::error::ApiError;
use crate::output::{
    attachment, list_csv_file_name, render_csv, yuho_csv_file_name, CSV_MEDIA_TYPE,
    DOCUMENT_COLUMNS, FILING_COLUMNS,
};
use crate::routes::AppState;

fn default_search_limit() -> i64 {
    200
}

fn default_list_limit() -> i64 {
    5000
}

fn default_doc_type() -> i64 {
    2
}

fn default_download_type() -> String {
    "zip".to_string()
}

#[derive(Debug, Deserialize)]
pub struct YuhoSearchParams {
    pub start_date: String,
    pub end_date: String,
    pub corporate_number: String,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_doc_type")]
    pub doc_type: i64,
    #[serde(default)]
    pub company: String,
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct LatestParams {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub company: String,
    #[serde(default = "default_doc_type")]
    pub doc_type: i64,
}

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(rename = "type", default = "default_download_type")]
    pub kind: String,
}

async fn search(
    state: &AppState,
    params: &YuhoSearchParams,
) -> Result<Envelope<FilingSummary>, ApiError> {
    Ok(state
        .filings
        .search_securities_reports(
            &params.start_date,
            &params.end_date,
            &params.corporate_number,
            params.limit,
        )
        .await?)
}

async fn list(state: &AppState, params: &ListParams) -> Result<Envelope<DocumentSummary>, ApiError> {
    Ok(state
        .filings
        .list_documents(
            &params.start_date,
            &params.end_date,
            params.doc_type,
            &params.company,
            params.limit,
        )
        .await?)
}

/// GET /edinet/yuho-search
pub async fn yuho_search(
    State(state): State<AppState>,
    query: Result<Query<YuhoSearchParams>, QueryRejection>,
) -> Result<Json<Envelope<FilingSummary>>, ApiError> {
    let Query(params) = query?;
    Ok(Json(search(&state, &params).await?))
}

/// GET /edinet/yuho-search.csv
pub async fn yuho_search_csv(
    State(state): State<AppState>,
    query: Result<Query<YuhoSearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let range = validate_date_range(&params.start_date, &params.end_date)?;
    let envelope = search(&state, &params).await?;
    let body = render_csv(&FILING_COLUMNS, &envelope.items)?;
    Ok(attachment(CSV_MEDIA_TYPE, &yuho_csv_file_name(&range), body))
}

/// GET /edinet/list
pub async fn list_documents(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Envelope<DocumentSummary>>, ApiError> {
    let Query(params) = query?;
    Ok(Json(list(&state, &params).await?))
}

/// GET /edinet/list.csv
pub async fn list_documents_csv(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let range = validate_date_range(&params.start_date, &params.end_date)?;
    let envelope = list(&state, &params).await?;
    let body = render_csv(&DOCUMENT_COLUMNS, &envelope.items)?;
    Ok(attachment(
        CSV_MEDIA_TYPE,
        &list_csv_file_name(&range, params.doc_type),
        body,
    ))
}

/// GET /edinet/latest-yuho-by-date
pub async fn latest_yuho(
    State(state): State<AppState>,
    query: Result<Query<LatestParams>, QueryRejection>,
) -> Result<Json<LatestReport>, ApiError> {
    let Query(params) = query?;
    let report = state
        .filings
        .latest_securities_report(
            &params.start_date,
            &params.end_date,
            &params.company,
            params.doc_type,
        )
        .await?;
    Ok(Json(report))
}

/// GET /edinet/download/:doc_id
pub async fn download(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
    query: Result<Query<DownloadParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let file = state.filings.download(&doc_id, &params.kind).await?;
    Ok(attachment(file.media_type, &file.file_name, file.bytes))
}
