// mod.rs - Data structures module

pub mod allele;
pub mod header;
pub mod loaders;
pub mod record;

// Re-export main types for convenience
pub use allele::{is_incomplete_allele, AlleleCall, SequenceType};
pub use header::LocusHeader;
pub use loaders::{ParseDiagnostic, ParseErrorKind, ParsedBatch, PerSampleFiles, RecordLoader, SummaryTable};
pub use record::{SampleRecord, UNTYPED_SCHEMES};
