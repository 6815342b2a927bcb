//! Access-log line extraction.
//!
//! Converts one raw access-log line into a structured [`LogRecord`] or a
//! well-defined "unparseable" outcome (`None`). Field grammars are compiled
//! once per [`LineExtractor`], never per line.
//!
//! Per-line failures are absorbed here: a line that cannot yield a full
//! record simply produces no record, and never surfaces an error.

pub mod line;
pub mod model;

pub use line::LineExtractor;
pub use model::{ExtractError, LogRecord};

/// Format of the timestamp embedded in a log line.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";
