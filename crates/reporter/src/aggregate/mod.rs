//! Aggregation of extracted records into per-file statistics.
//!
//! The [`Aggregator`] is a single-owner accumulator: one invocation of the
//! pipeline owns one aggregator, mutates it in place, and discards it. The
//! time range is a running min/max comparison — no timestamp collection.

pub mod fold;
pub mod model;

pub use fold::Aggregator;
pub use model::{AggregateError, AnalyzedLog};

/// Inputs with fewer raw lines than this are not worth analyzing.
pub const MIN_ANALYZABLE_LINES: usize = 5;
