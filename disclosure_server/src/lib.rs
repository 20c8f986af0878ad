//! HTTP surface of the disclosure proxy: axum routes over the library
//! services, error-to-response mapping and CSV rendering.

pub mod error;
pub mod output;
pub mod routes;

pub use error::ApiError;
pub use routes::{build_router, AppState};
