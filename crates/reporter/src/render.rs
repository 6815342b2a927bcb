//! Render — threshold- and rank-filtered text reports.
//!
//! Pure formatting over a finalized [`AnalyzedLog`]. Ranked sections are
//! ordered by count descending with the key as tie-break, so output is
//! byte-identical across reruns of the same aggregate.

use std::collections::HashMap;

use crate::aggregate::AnalyzedLog;
use crate::extract::TIMESTAMP_FORMAT;

/// Rendering knobs for one report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Minimum percentage share (0–100) an entry must reach to appear in
    /// the IP, status and user-agent sections.
    pub percent_threshold: f64,
    /// Requested page count. The page section emits one entry past this
    /// (see [`render`]).
    pub top_pages: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            percent_threshold: 5.0,
            top_pages: 10,
        }
    }
}

/// Render the analysis of one log file as a text report.
///
/// Sections, in order: header with the time range, hit count, visitor IPs,
/// status codes, user agents, pages. Percentages are shares of the raw hit
/// count, to one decimal. The page section ignores the threshold but stops
/// after `top_pages + 1` entries: the original reporting loop emitted one
/// entry past the requested count, and downstream consumers may depend on
/// that shape, so it is kept as documented behavior.
pub fn render(data: &AnalyzedLog, label: &str, opts: &ReportOptions) -> String {
    let mut out = format!(
        "Analysis of: {}, from {} to {}:\n",
        label,
        data.earliest.format(TIMESTAMP_FORMAT),
        data.latest.format(TIMESTAMP_FORMAT)
    );
    out.push_str(&format!("Hits: {}\n", data.hits));

    out.push_str("IP addresses:\n");
    for (ip, count) in ranked(&data.visitor_ips) {
        let perc = percent(count, data.hits);
        if perc >= opts.percent_threshold {
            out.push_str(&format!("{}: {:.1}%\n", ip, perc));
        }
    }

    out.push_str("Status Codes:\n");
    for (code, count) in ranked(&data.status) {
        let perc = percent(count, data.hits);
        if perc >= opts.percent_threshold {
            out.push_str(&format!("{}: {:.1}%\n", code, perc));
        }
    }

    out.push_str(&format!(
        "Number of user agents: {}\n",
        data.user_agents.len()
    ));
    for (agent, count) in ranked(&data.user_agents) {
        let perc = percent(count, data.hits);
        if perc >= opts.percent_threshold {
            out.push_str(&format!("User agent {}: {:.1}%\n", agent, perc));
        }
    }

    out.push_str(&format!("Number of pages visited: {}\n", data.pages.len()));
    out.push_str(&format!("Top {} pages:\n", opts.top_pages));
    for (i, (page, count)) in ranked(&data.pages).into_iter().enumerate() {
        let perc = percent(count, data.hits);
        out.push_str(&format!("Page {}: {} {:.1}%\n", page, count, perc));
        if i >= opts.top_pages {
            break;
        }
    }

    out
}

/// Entries ordered by count descending, key ascending on ties.
fn ranked(map: &HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

fn percent(count: u64, hits: usize) -> f64 {
    (count as f64 / hits as f64) * 100.0
}

// ── Tests ───────────────────────────────────────────────────────
