//! Remote module — selection over timestamp-named storage listings.
//!
//! The storage collaborator returns a flat, unordered set of file names;
//! everything here — domain/kind filtering, embedded-date decoding and
//! recency ordering — happens on this side of the seam.

pub mod model;
pub mod select;

pub use model::{LogFileKind, RemoteLogFile};
pub use select::{FileSelector, SelectError};

/// Format of the date token embedded in stored file names.
pub const FILE_DATE_FORMAT: &str = "%d-%b-%Y:%H:%M:%S";
