//! `/gbiz/*` handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use disclosure_lib::types::HojinInfo;
use disclosure_lib::CompanySearch;
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::AppState;

fn default_company_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct CompanySearchParams {
    pub name: String,
    #[serde(default = "default_company_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct CompanyDetailParams {
    pub corporate_number: String,
}

/// GET /gbiz/company-search
pub async fn company_search(
    State(state): State<AppState>,
    query: Result<Query<CompanySearchParams>, QueryRejection>,
) -> Result<Json<CompanySearch>, ApiError> {
    let Query(params) = query?;
    let found = state
        .companies
        .search_by_name(&params.name, params.limit)
        .await?;
    Ok(Json(found))
}

/// GET /gbiz/company-detail
pub async fn company_detail(
    State(state): State<AppState>,
    query: Result<Query<CompanyDetailParams>, QueryRejection>,
) -> Result<Json<HojinInfo>, ApiError> {
    let Query(params) = query?;
    let info = state
        .companies
        .detail(&params.corporate_number)
        .await?;
    Ok(Json(info))
}
