//! Filter module — per-domain page-path exclusion rules.

pub mod engine;

pub use engine::{DomainFilterConfig, FilterEngine};
