//! Error types for the library layer.

/// Errors produced by the library layer. Every failure falls into one of
/// four kinds, and each kind maps to a single HTTP status at the server edge.
#[derive(thiserror::Error, Debug)]
pub enum DisclosureError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// A required credential or setting is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// An upstream API failed. `status` is the upstream HTTP status when
    /// one was received.
    #[error("Upstream error: {message}")]
    Upstream { status: Option<u16>, message: String },
    /// The lookup succeeded but matched nothing.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<disclosure_api::Error> for DisclosureError {
    fn from(e: disclosure_api::Error) -> Self {
        let status = e.status();
        let message = match e {
            disclosure_api::Error::HttpStatus { status, body } => {
                format!("HTTP {}: {}", status, body)
            }
            disclosure_api::Error::RequestFailed(msg) => format!("connection failed: {}", msg),
            disclosure_api::Error::InvalidResponse(msg) => {
                format!("unreadable response: {}", msg)
            }
        };
        Self::Upstream { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_keeps_upstream_status() {
        let err = DisclosureError::from(disclosure_api::Error::HttpStatus {
            status: 503,
            body: "Service Unavailable".into(),
        });
        match err {
            DisclosureError::Upstream { status, message } => {
                assert_eq!(status, Some(503));
                assert!(message.contains("Service Unavailable"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn transport_failure_has_no_status() {
        let err = DisclosureError::from(disclosure_api::Error::RequestFailed("timed out".into()));
        assert!(matches!(err, DisclosureError::Upstream { status: None, .. }));
        assert_eq!(err.to_string(), "Upstream error: connection failed: timed out");
    }

    #[test]
    fn unreadable_body_has_no_status() {
        let err = DisclosureError::from(disclosure_api::Error::InvalidResponse(
            "expected value at line 1 column 1".into(),
        ));
        match err {
            DisclosureError::Upstream { status, message } => {
                assert_eq!(status, None);
                assert!(message.starts_with("unreadable response"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
