//! Model — the structured form of one parsed log line.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid line-grammar pattern: {0}")]
    InvalidPattern(String),
}

/// One fully parsed access-log line.
///
/// A record exists only if timestamp, status, user agent and page path all
/// extracted successfully; `ip` alone is optional. Lines failing any
/// required field are discarded before a record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Dotted-quad visitor address, absent when the first field held none.
    pub ip: Option<String>,
    /// Second-precision timestamp from the bracketed date field.
    pub timestamp: NaiveDateTime,
    /// Three-digit status token. Kept as a string: the grammar matches a
    /// token, and codes are compared by identity, never arithmetically.
    pub status: String,
    /// Content of the trailing double-quoted field.
    pub user_agent: String,
    /// Path token of the request field.
    pub page_path: String,
}
