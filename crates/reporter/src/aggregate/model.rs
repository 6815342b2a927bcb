//! Model — finalized analysis of one log file.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use super::MIN_ANALYZABLE_LINES;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("only {0} raw lines, at least {min} required", min = MIN_ANALYZABLE_LINES)]
    InsufficientData(usize),

    #[error("no line yielded a parseable timestamp")]
    NoUsableData,
}

/// Aggregate result for one processed log file.
///
/// `hits` counts raw input lines, including lines that were unparseable or
/// filtered out; the frequency maps only cover accepted records. The time
/// range covers every extracted record, excluded or not, so
/// `earliest <= latest` holds whenever finalization succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedLog {
    pub hits: usize,
    pub visitor_ips: HashMap<String, u64>,
    pub status: HashMap<String, u64>,
    pub user_agents: HashMap<String, u64>,
    pub pages: HashMap<String, u64>,
    pub earliest: NaiveDateTime,
    pub latest: NaiveDateTime,
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_names_the_floor() {
        let msg = AggregateError::InsufficientData(3).to_string();
        assert!(msg.contains('3'), "message should carry the count: {msg}");
        assert!(msg.contains('5'), "message should carry the floor: {msg}");
    }

    #[test]
    fn analyzed_log_serializes_with_second_precision_dates() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap();
        let data = AnalyzedLog {
            hits: 5,
            visitor_ips: HashMap::new(),
            status: HashMap::new(),
            user_agents: HashMap::new(),
            pages: HashMap::new(),
            earliest: ts,
            latest: ts,
        };
        let json = serde_json::to_value(&data).expect("serializes");
        assert_eq!(json["hits"], 5);
        assert_eq!(json["earliest"], "2024-01-05T10:15:30");
    }
}
