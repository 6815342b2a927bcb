//! Store — collaborator seams for remote storage and report persistence.
//!
//! The engine owns no transport. Listing, fetching, uploading and report
//! persistence are provided by callers through these traits; a transport
//! failure is propagated unchanged with its underlying cause preserved,
//! and is never retried at this layer.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::remote::LogFileKind;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a collaborator's own error type.
    pub fn transport<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Transport(Box::new(cause))
    }
}

/// Opaque identifier returned by the persistence sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportId(pub i64);

/// One finished report, keyed by domain and report date, as handed to the
/// persistence sink.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRecord {
    pub domain: String,
    pub report_text: String,
    pub hits: usize,
    pub first_date_of_log: NaiveDateTime,
    pub last_date_of_log: NaiveDateTime,
    pub log_type: LogFileKind,
    pub date_of_report: DateTime<Utc>,
}

/// Remote object storage holding raw logs and rendered outputs.
///
/// The collaborator returns the full stored set; it is not expected to
/// filter or sort (that is the selector's job).
#[cfg_attr(test, mockall::automock)]
pub trait LogStore: Send + Sync {
    /// Full, unfiltered set of stored file names.
    fn list_files(&self) -> Result<Vec<String>, StoreError>;

    /// Raw text of one stored file.
    fn fetch_text(&self, file_name: &str) -> Result<String, StoreError>;

    /// Store `text` under `file_name`.
    fn put_text(&self, file_name: &str, text: &str) -> Result<(), StoreError>;
}

/// Persistence sink for finished reports.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink: Send + Sync {
    fn save(&self, record: &ReportRecord) -> Result<ReportId, StoreError>;
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_preserves_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
        let err = StoreError::transport(cause);
        assert!(err.to_string().contains("connection timed out"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn report_record_serializes_row_shape() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = ReportRecord {
            domain: "siteA".to_string(),
            report_text: "Hits: 5\n".to_string(),
            hits: 5,
            first_date_of_log: ts,
            last_date_of_log: ts,
            log_type: LogFileKind::Raw,
            date_of_report: DateTime::from_timestamp(1_704_500_000, 0).unwrap(),
        };
        let json = serde_json::to_value(&record).expect("serializes");
        assert_eq!(json["domain"], "siteA");
        assert_eq!(json["hits"], 5);
        assert_eq!(json["log_type"], "raw");
        assert!(json["date_of_report"].is_string());
    }
}
