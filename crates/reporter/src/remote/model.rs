//! Model — remote listing descriptors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether a stored file is a raw access log or an already-rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFileKind {
    Raw,
    Output,
}

impl LogFileKind {
    /// Substring marker embedded in stored file names.
    pub fn marker(&self) -> &'static str {
        match self {
            LogFileKind::Raw => "Raw",
            LogFileKind::Output => "Output",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFileKind::Raw => "raw",
            LogFileKind::Output => "output",
        }
    }
}

/// One candidate entry from a remote storage listing.
///
/// Constructed transiently per listing call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLogFile {
    pub file_name: String,
    /// Decoded from the date token embedded in the file name.
    pub timestamp: NaiveDateTime,
    pub kind: LogFileKind,
}
