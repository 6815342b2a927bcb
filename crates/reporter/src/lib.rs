// Domain-driven module structure for the access-log reporting engine.

// Pipeline stages
pub mod aggregate;
pub mod extract;
pub mod filter;
pub mod render;

// Remote selection and collaborator seams
pub mod remote;
pub mod store;

// Configuration and orchestration
pub mod conf;
pub mod pipeline;

// Re-export commonly used types
pub use aggregate::AnalyzedLog;
pub use conf::EngineConfig;
pub use filter::DomainFilterConfig;
pub use pipeline::{PipelineError, ReportOutcome, ReportPipeline};
