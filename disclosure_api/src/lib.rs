//! Thin async clients for the EDINET v2 disclosure API and the gBizINFO
//! corporate registry, plus their query builders and wire types.

mod client;
mod errors;
mod gbiz;
mod http;
mod query;
pub mod types;
pub use self::client::EdinetClient;
pub use self::errors::Error;
pub use self::gbiz::GbizClient;
pub use self::query::{DocumentFileQuery, DocumentListQuery, HojinSearchQuery, Query};
