mod document;
pub use self::document::{DocumentList, DownloadKind, FilingRecord, ListType, Metadata, ResultSet};

mod hojin;
pub use self::hojin::{HojinInfo, HojinResponse};
