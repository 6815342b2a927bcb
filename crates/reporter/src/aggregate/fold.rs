//! Fold — running accumulation of extracted records.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::model::{AggregateError, AnalyzedLog};
use super::MIN_ANALYZABLE_LINES;
use crate::extract::LogRecord;

/// Stateful accumulator for one log file.
///
/// Hit counting is independent of extraction and filtering: call
/// [`record_line`](Aggregator::record_line) once per raw input line, and
/// [`record`](Aggregator::record) for each line that produced a
/// [`LogRecord`].
#[derive(Debug, Default)]
pub struct Aggregator {
    hits: usize,
    visitor_ips: HashMap<String, u64>,
    status: HashMap<String, u64>,
    user_agents: HashMap<String, u64>,
    pages: HashMap<String, u64>,
    earliest: Option<NaiveDateTime>,
    latest: Option<NaiveDateTime>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one raw input line, parseable or not.
    pub fn record_line(&mut self) {
        self.hits += 1;
    }

    /// Fold one extracted record.
    ///
    /// The time range is updated for every record; the frequency maps only
    /// when the record was not excluded by the ignore rules.
    pub fn record(&mut self, record: &LogRecord, excluded: bool) {
        let ts = record.timestamp;
        self.earliest = Some(self.earliest.map_or(ts, |e| e.min(ts)));
        self.latest = Some(self.latest.map_or(ts, |l| l.max(ts)));

        if excluded {
            return;
        }

        if let Some(ip) = &record.ip {
            *self.visitor_ips.entry(ip.clone()).or_default() += 1;
        }
        *self.status.entry(record.status.clone()).or_default() += 1;
        *self
            .user_agents
            .entry(record.user_agent.clone())
            .or_default() += 1;
        *self.pages.entry(record.page_path.clone()).or_default() += 1;
    }

    /// Close the fold.
    ///
    /// Fails with `InsufficientData` below the line floor, and with
    /// `NoUsableData` when no line ever yielded a timestamp — the time
    /// range would otherwise be a min/max over an empty set.
    pub fn finalize(self) -> Result<AnalyzedLog, AggregateError> {
        if self.hits < MIN_ANALYZABLE_LINES {
            return Err(AggregateError::InsufficientData(self.hits));
        }

        let (earliest, latest) = match (self.earliest, self.latest) {
            (Some(e), Some(l)) => (e, l),
            _ => return Err(AggregateError::NoUsableData),
        };

        Ok(AnalyzedLog {
            hits: self.hits,
            visitor_ips: self.visitor_ips,
            status: self.status,
            user_agents: self.user_agents,
            pages: self.pages,
            earliest,
            latest,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn rec(ip: Option<&str>, day: u32, status: &str, page: &str) -> LogRecord {
        LogRecord {
            ip: ip.map(str::to_string),
            timestamp: ts(day, 0),
            status: status.to_string(),
            user_agent: "curl/8.0".to_string(),
            page_path: page.to_string(),
        }
    }

    fn feed(agg: &mut Aggregator, record: &LogRecord, excluded: bool) {
        agg.record_line();
        agg.record(record, excluded);
    }

    #[test]
    fn fewer_than_five_lines_is_insufficient() {
        let mut agg = Aggregator::new();
        for _ in 0..4 {
            feed(&mut agg, &rec(Some("1.2.3.4"), 5, "200", "/a"), false);
        }
        assert_eq!(agg.finalize(), Err(AggregateError::InsufficientData(4)));
    }

    #[test]
    fn no_timestamp_anywhere_is_unusable() {
        let mut agg = Aggregator::new();
        for _ in 0..6 {
            agg.record_line(); // lines seen, nothing extracted
        }
        assert_eq!(agg.finalize(), Err(AggregateError::NoUsableData));
    }

    #[test]
    fn insufficient_data_wins_over_no_usable_data() {
        let mut agg = Aggregator::new();
        agg.record_line();
        assert_eq!(agg.finalize(), Err(AggregateError::InsufficientData(1)));
    }

    #[test]
    fn hits_count_raw_lines_not_records() {
        let mut agg = Aggregator::new();
        for _ in 0..7 {
            agg.record_line();
        }
        // Only two of the seven lines produced records.
        agg.record(&rec(Some("1.2.3.4"), 5, "200", "/a"), false);
        agg.record(&rec(Some("1.2.3.4"), 6, "200", "/a"), true);

        let data = agg.finalize().unwrap();
        assert_eq!(data.hits, 7);
    }

    #[test]
    fn range_is_running_min_max() {
        let mut agg = Aggregator::new();
        for day in [7, 3, 9, 5, 4] {
            feed(&mut agg, &rec(None, day, "200", "/a"), false);
        }
        let data = agg.finalize().unwrap();
        assert_eq!(data.earliest, ts(3, 0));
        assert_eq!(data.latest, ts(9, 0));
        assert!(data.earliest <= data.latest);
    }

    #[test]
    fn excluded_records_still_widen_the_range() {
        let mut agg = Aggregator::new();
        feed(&mut agg, &rec(None, 1, "200", "/site.css"), true);
        for _ in 0..4 {
            feed(&mut agg, &rec(None, 5, "200", "/a"), false);
        }
        let data = agg.finalize().unwrap();
        assert_eq!(data.earliest, ts(1, 0), "excluded record must widen range");
        assert!(data.pages.get("/site.css").is_none());
        assert_eq!(data.pages["/a"], 4);
    }

    #[test]
    fn excluded_records_touch_no_frequency_map() {
        let mut agg = Aggregator::new();
        for _ in 0..5 {
            feed(&mut agg, &rec(Some("9.9.9.9"), 5, "404", "/skip-me"), true);
        }
        let data = agg.finalize().unwrap();
        assert!(data.visitor_ips.is_empty());
        assert!(data.status.is_empty());
        assert!(data.user_agents.is_empty());
        assert!(data.pages.is_empty());
    }

    #[test]
    fn missing_ip_counts_everything_else() {
        let mut agg = Aggregator::new();
        for _ in 0..5 {
            feed(&mut agg, &rec(None, 5, "200", "/a"), false);
        }
        let data = agg.finalize().unwrap();
        assert!(data.visitor_ips.is_empty());
        assert_eq!(data.status["200"], 5);
        assert_eq!(data.user_agents["curl/8.0"], 5);
        assert_eq!(data.pages["/a"], 5);
    }

    #[test]
    fn counts_accumulate_per_key() {
        let mut agg = Aggregator::new();
        feed(&mut agg, &rec(Some("1.1.1.1"), 5, "200", "/a"), false);
        feed(&mut agg, &rec(Some("1.1.1.1"), 5, "200", "/a"), false);
        feed(&mut agg, &rec(Some("2.2.2.2"), 5, "404", "/b"), false);
        feed(&mut agg, &rec(Some("1.1.1.1"), 5, "200", "/a"), false);
        feed(&mut agg, &rec(Some("2.2.2.2"), 5, "200", "/a"), false);

        let data = agg.finalize().unwrap();
        assert_eq!(data.visitor_ips["1.1.1.1"], 3);
        assert_eq!(data.visitor_ips["2.2.2.2"], 2);
        assert_eq!(data.status["200"], 4);
        assert_eq!(data.status["404"], 1);
        assert_eq!(data.pages["/a"], 4);
        assert_eq!(data.pages["/b"], 1);
    }
}
