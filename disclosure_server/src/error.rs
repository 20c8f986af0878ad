//! Maps library errors onto HTTP responses with a `{"detail": ...}` body.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use disclosure_lib::DisclosureError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Disclosure(DisclosureError),
    /// Query string could not be deserialized (missing or mistyped parameter).
    BadQuery(String),
    /// Response body could not be rendered.
    Render(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Disclosure(e) => match e {
                DisclosureError::Validation(_) => StatusCode::BAD_REQUEST,
                DisclosureError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                DisclosureError::NotFound(_) => StatusCode::NOT_FOUND,
                DisclosureError::Upstream { status, .. } => status
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
            },
            ApiError::BadQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Disclosure(DisclosureError::Upstream { message, .. }) => message.clone(),
            ApiError::Disclosure(e) => e.to_string(),
            ApiError::BadQuery(msg) => format!("Invalid input: {}", msg),
            ApiError::Render(msg) => format!("Failed to render response: {}", msg),
        }
    }
}

impl From<DisclosureError> for ApiError {
    fn from(e: DisclosureError) -> Self {
        ApiError::Disclosure(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadQuery(rejection.body_text())
    }
}

impl From<csv::Error> for ApiError {
    fn from(e: csv::Error) -> Self {
        ApiError::Render(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            tracing::error!("{} {}", status, detail);
        } else {
            tracing::warn!("{} {}", status, detail);
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status: Option<u16>) -> ApiError {
        ApiError::from(DisclosureError::Upstream {
            status,
            message: "HTTP error".into(),
        })
    }

    #[test]
    fn status_per_kind() {
        assert_eq!(
            ApiError::from(DisclosureError::Validation("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DisclosureError::Configuration("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(DisclosureError::NotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn upstream_status_passes_through() {
        assert_eq!(upstream(Some(503)).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(upstream(Some(401)).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn upstream_without_error_status_is_bad_gateway() {
        assert_eq!(upstream(None).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream(Some(302)).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn upstream_detail_is_the_message() {
        assert_eq!(upstream(Some(500)).detail(), "HTTP error");
    }
}
