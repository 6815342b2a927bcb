//! Engine — substring ignore-rule filtering for page paths.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Per-domain exclusion rules.
///
/// A page path containing any entry of either list is excluded from
/// frequency counting. Matching is case-sensitive substring containment,
/// not glob or regex. Empty lists exclude nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainFilterConfig {
    /// Extension fragments, e.g. `.css`, `.woff2`.
    pub ext_ignore: Vec<String>,
    /// Path fragments, e.g. `/health`, `/wp-admin`.
    pub path_ignore: Vec<String>,
}

impl DomainFilterConfig {
    /// Build rules from the comma-separated columns of the domain table.
    pub fn from_csv(ext_ignore: Option<&str>, path_ignore: Option<&str>) -> Self {
        Self {
            ext_ignore: split_csv(ext_ignore),
            path_ignore: split_csv(path_ignore),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ext_ignore.is_empty() && self.path_ignore.is_empty()
    }
}

fn split_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct FilterStats {
    pub paths_scanned: AtomicU64,
    pub paths_excluded: AtomicU64,
}

/// Decides, per record, whether a page path is excluded by the domain's
/// ignore rules.
pub struct FilterEngine {
    rules: DomainFilterConfig,
    stats: FilterStats,
}

impl FilterEngine {
    pub fn new(rules: DomainFilterConfig) -> Self {
        Self {
            rules,
            stats: FilterStats::default(),
        }
    }

    #[inline]
    pub fn is_excluded(&self, page_path: &str) -> bool {
        self.stats.paths_scanned.fetch_add(1, Ordering::Relaxed);

        let excluded = self
            .rules
            .ext_ignore
            .iter()
            .chain(self.rules.path_ignore.iter())
            .any(|needle| page_path.contains(needle.as_str()));

        if excluded {
            self.stats.paths_excluded.fetch_add(1, Ordering::Relaxed);
        }

        excluded
    }

    /// (scanned, excluded) counters for diagnostics.
    pub fn stats(&self) -> (u64, u64) {
        (
            self.stats.paths_scanned.load(Ordering::Relaxed),
            self.stats.paths_excluded.load(Ordering::Relaxed),
        )
    }
}

// ── Tests ───────────────────────────────────────────────────────
