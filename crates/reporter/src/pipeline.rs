//! Pipeline — orchestration of one report-generation invocation.
//!
//! Composes selection → fetch → extraction/filtering/aggregation →
//! rendering → persistence. Each invocation owns its aggregation state, so
//! independent pipelines may run in parallel without locking. Any stage
//! failure short-circuits: nothing is uploaded or persisted for a failed
//! run, and an abandoned invocation leaves no partial side effect.

use chrono::{NaiveDateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::aggregate::{AggregateError, Aggregator, AnalyzedLog};
use crate::conf::EngineConfig;
use crate::extract::{ExtractError, LineExtractor};
use crate::filter::{DomainFilterConfig, FilterEngine};
use crate::remote::{FileSelector, LogFileKind, RemoteLogFile, SelectError, FILE_DATE_FORMAT};
use crate::render::{render, ReportOptions};
use crate::store::{LogStore, ReportId, ReportRecord, ReportSink, StoreError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything produced by one successful [`ReportPipeline::run`].
#[derive(Debug)]
pub struct ReportOutcome {
    pub report_id: ReportId,
    /// The raw log file that was analyzed.
    pub source_file: String,
    /// The output object the rendered report was stored under.
    pub output_file: String,
    pub report: String,
    pub hits: usize,
    pub earliest: NaiveDateTime,
    pub latest: NaiveDateTime,
}

/// Per-domain report pipeline.
///
/// Filter rules and rendering defaults are fixed at construction — the
/// engine never fetches configuration mid-run. Grammar patterns are
/// compiled here, once per pipeline lifetime.
pub struct ReportPipeline<S: LogStore, K: ReportSink> {
    domain: String,
    options: ReportOptions,
    extractor: LineExtractor,
    filter: FilterEngine,
    selector: FileSelector,
    store: S,
    sink: K,
}

impl<S: LogStore, K: ReportSink> std::fmt::Debug for ReportPipeline<S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportPipeline")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl<S: LogStore, K: ReportSink> ReportPipeline<S, K> {
    pub fn new(
        config: &EngineConfig,
        domain: impl Into<String>,
        rules: DomainFilterConfig,
        store: S,
        sink: K,
    ) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        Ok(Self {
            domain: domain.into(),
            options: ReportOptions {
                percent_threshold: config.report.percent_threshold,
                top_pages: config.report.top_pages,
            },
            extractor: LineExtractor::new()?,
            filter: FilterEngine::new(rules),
            selector: FileSelector::new()?,
            store,
            sink,
        })
    }

    /// Analyze the most recent raw log for this domain, upload the rendered
    /// report as an `Output` object, and persist its metadata.
    pub fn run(&self) -> Result<ReportOutcome, PipelineError> {
        let listing = self.store.list_files()?;
        let source = self
            .selector
            .most_recent(&listing, &self.domain, LogFileKind::Raw)?;
        info!(domain = %self.domain, file = %source.file_name, "analyzing raw log");

        let raw = self.store.fetch_text(&source.file_name)?;
        let data = analyze_text(&self.extractor, &self.filter, &raw)?;
        debug!(
            domain = %self.domain,
            hits = data.hits,
            pages = data.pages.len(),
            agents = data.user_agents.len(),
            "aggregation finished"
        );

        let report = render(&data, &source.file_name, &self.options);

        let now = Utc::now();
        let output_file = format!(
            "{}-Output-{}.log",
            self.domain,
            now.format(FILE_DATE_FORMAT)
        );
        self.store.put_text(&output_file, &report)?;

        let record = ReportRecord {
            domain: self.domain.clone(),
            report_text: report.clone(),
            hits: data.hits,
            first_date_of_log: data.earliest,
            last_date_of_log: data.latest,
            log_type: LogFileKind::Raw,
            date_of_report: now,
        };
        let report_id = self.sink.save(&record)?;
        info!(domain = %self.domain, id = report_id.0, "report persisted");

        Ok(ReportOutcome {
            report_id,
            source_file: source.file_name,
            output_file,
            report,
            hits: data.hits,
            earliest: data.earliest,
            latest: data.latest,
        })
    }

    /// Contents of the most recently rendered report for this domain.
    pub fn latest_report(&self) -> Result<String, PipelineError> {
        let listing = self.store.list_files()?;
        let latest = self
            .selector
            .most_recent(&listing, &self.domain, LogFileKind::Output)?;
        Ok(self.store.fetch_text(&latest.file_name)?)
    }

    /// Most recent `n` raw log descriptors for this domain.
    pub fn recent_raw_logs(&self, n: usize) -> Result<Vec<RemoteLogFile>, PipelineError> {
        let listing = self.store.list_files()?;
        Ok(self
            .selector
            .most_recent_n(&listing, &self.domain, LogFileKind::Raw, n)?)
    }
}

/// Fold raw log text into a finalized analysis.
///
/// Lines are the `'\n'`-split segments of `raw`; every segment counts as a
/// hit whether or not it parses, so the hit count equals the line count of
/// the source text.
pub fn analyze_text(
    extractor: &LineExtractor,
    filter: &FilterEngine,
    raw: &str,
) -> Result<AnalyzedLog, AggregateError> {
    let mut aggregator = Aggregator::new();
    for line in raw.split('\n') {
        aggregator.record_line();
        if let Some(record) = extractor.extract(line) {
            let excluded = filter.is_excluded(&record.page_path);
            aggregator.record(&record, excluded);
        }
    }
    aggregator.finalize()
}

// ── Tests ───────────────────────────────────────────────────────
