mod common;
pub use self::common::Query;
mod document;
pub use self::document::{DocumentFileQuery, DocumentListQuery};

mod hojin;
pub use self::hojin::HojinSearchQuery;
