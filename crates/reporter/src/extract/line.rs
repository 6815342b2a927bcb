//! Line — single access-log line extraction.

use chrono::NaiveDateTime;
use regex::Regex;

use super::model::{ExtractError, LogRecord};
use super::TIMESTAMP_FORMAT;

/// Dotted-quad IPv4 token.
const IP_PATTERN: &str = r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}";

/// Access-log timestamp body: `DD/Mon/YYYY:HH:MM:SS`.
const TIMESTAMP_PATTERN: &str = r"[0-9]{2}/[A-Za-z]{3}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2}";

/// Three-digit status code surrounded by single spaces.
const STATUS_PATTERN: &str = r" [0-9]{3} ";

/// Extracts [`LogRecord`]s from raw lines.
///
/// All three grammar patterns are compiled in [`LineExtractor::new`] and
/// reused for every line.
pub struct LineExtractor {
    ip: Regex,
    timestamp: Regex,
    status: Regex,
}

impl LineExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            ip: compile(IP_PATTERN)?,
            timestamp: compile(TIMESTAMP_PATTERN)?,
            status: compile(STATUS_PATTERN)?,
        })
    }

    /// Extract a structured record from one raw line.
    ///
    /// The IP is searched only in the first whitespace-delimited field and
    /// its absence is tolerated. A missing or unparseable timestamp or
    /// status discards the line; so does a missing user agent or page path
    /// afterwards. No partial record is ever returned.
    pub fn extract(&self, line: &str) -> Option<LogRecord> {
        let ip = line
            .split(' ')
            .next()
            .and_then(|first| self.ip.find(first))
            .map(|m| m.as_str().to_string());

        let timestamp = self.timestamp.find(line)?;
        let timestamp = NaiveDateTime::parse_from_str(timestamp.as_str(), TIMESTAMP_FORMAT).ok()?;
        let status = self.status.find(line)?.as_str().trim().to_string();

        // The request and trailing fields are delimited by ` "` pairs:
        //   ... [date] "METHOD /path PROTO" status size "referrer" "agent"
        let quoted: Vec<&str> = line.split(" \"").collect();
        if quoted.len() < 3 {
            return None;
        }

        let last = quoted[quoted.len() - 1];
        let user_agent = last.strip_suffix('"').unwrap_or(last);
        if user_agent.is_empty() {
            return None;
        }

        let page_path = quoted[quoted.len() - 3].split(' ').nth(1)?.to_string();

        Some(LogRecord {
            ip,
            timestamp,
            status,
            user_agent: user_agent.to_string(),
            page_path,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, ExtractError> {
    Regex::new(pattern).map_err(|e| ExtractError::InvalidPattern(e.to_string()))
}

// ── Tests ───────────────────────────────────────────────────────
