//! Select — timestamp-ordered selection from a remote file listing.

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

use super::model::{LogFileKind, RemoteLogFile};
use super::FILE_DATE_FORMAT;

/// Date token embedded in stored file names: `DD-Mon-20YY:HH:MM:SS`.
const FILE_DATE_PATTERN: &str = r"[0-9]{2}-[a-zA-Z]{3}-20[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2}";

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("invalid file-date pattern: {0}")]
    InvalidPattern(String),

    #[error("no {} files stored for domain {domain}", .kind.as_str())]
    NoMatchingFiles { domain: String, kind: LogFileKind },
}

/// Filters and orders remote file listings by embedded timestamp.
pub struct FileSelector {
    file_date: Regex,
}

impl FileSelector {
    pub fn new() -> Result<Self, SelectError> {
        let file_date =
            Regex::new(FILE_DATE_PATTERN).map_err(|e| SelectError::InvalidPattern(e.to_string()))?;
        Ok(Self { file_date })
    }

    /// Entries for `domain` of the given kind, newest first.
    ///
    /// A name qualifies when it contains both the domain token and the
    /// kind marker as substrings. Qualifying names without a decodable
    /// embedded date are skipped. An empty result is an error: the caller
    /// asked for files that are not there.
    pub fn select(
        &self,
        listing: &[String],
        domain: &str,
        kind: LogFileKind,
    ) -> Result<Vec<RemoteLogFile>, SelectError> {
        let mut matches: Vec<RemoteLogFile> = listing
            .iter()
            .filter(|name| name.contains(domain) && name.contains(kind.marker()))
            .filter_map(|name| match self.embedded_date(name) {
                Some(timestamp) => Some(RemoteLogFile {
                    file_name: name.clone(),
                    timestamp,
                    kind,
                }),
                None => {
                    warn!(file = %name, "listed file has no decodable date token, skipping");
                    None
                }
            })
            .collect();

        if matches.is_empty() {
            return Err(SelectError::NoMatchingFiles {
                domain: domain.to_string(),
                kind,
            });
        }

        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matches)
    }

    /// Most-recent-one policy.
    pub fn most_recent(
        &self,
        listing: &[String],
        domain: &str,
        kind: LogFileKind,
    ) -> Result<RemoteLogFile, SelectError> {
        let mut sorted = self.select(listing, domain, kind)?;
        Ok(sorted.remove(0))
    }

    /// Most-recent-N policy.
    pub fn most_recent_n(
        &self,
        listing: &[String],
        domain: &str,
        kind: LogFileKind,
        n: usize,
    ) -> Result<Vec<RemoteLogFile>, SelectError> {
        let mut sorted = self.select(listing, domain, kind)?;
        sorted.truncate(n);
        Ok(sorted)
    }

    fn embedded_date(&self, name: &str) -> Option<NaiveDateTime> {
        let token = self.file_date.find(name)?;
        NaiveDateTime::parse_from_str(token.as_str(), FILE_DATE_FORMAT).ok()
    }
}

// ── Tests ───────────────────────────────────────────────────────
