// mod.rs - Core logic module

pub mod classify;
pub mod pipeline;
pub mod scheme;

// Re-export main types for convenience
pub use classify::{classify, partition_records, Classification, Partition};
pub use pipeline::{run_pipeline, InputSource, RunConfig, RunSummary};
pub use scheme::{select_scheme, SchemeSelection, SchemeTally, COVERAGE_WARNING_THRESHOLD};
