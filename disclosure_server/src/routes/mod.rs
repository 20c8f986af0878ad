//! Router construction for the disclosure server.

pub mod edinet;
pub mod gbiz;
pub mod health;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use disclosure_lib::{CompanyService, Config, DisclosureError, FilingService};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub filings: Arc<FilingService>,
    pub companies: Arc<CompanyService>,
}

impl AppState {
    /// Fails when either upstream credential is missing.
    pub fn from_config(config: &Config) -> Result<Self, DisclosureError> {
        Ok(Self::new(
            FilingService::from_config(config)?,
            CompanyService::from_config(config)?,
        ))
    }

    pub fn new(filings: FilingService, companies: CompanyService) -> Self {
        Self {
            filings: Arc::new(filings),
            companies: Arc::new(companies),
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let edinet = Router::new()
        .route("/yuho-search", get(edinet::yuho_search))
        .route("/yuho-search.csv", get(edinet::yuho_search_csv))
        .route("/list", get(edinet::list_documents))
        .route("/list.csv", get(edinet::list_documents_csv))
        .route("/latest-yuho-by-date", get(edinet::latest_yuho))
        .route("/download/:doc_id", get(edinet::download));

    let gbiz = Router::new()
        .route("/company-search", get(gbiz::company_search))
        .route("/company-detail", get(gbiz::company_detail));

    Router::new()
        .route("/", get(health::root))
        .route("/healthz", get(health::healthz))
        .nest("/edinet", edinet)
        .nest("/gbiz", gbiz)
        .layer(cors_layer(config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
