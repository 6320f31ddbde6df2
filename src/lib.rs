// lib.rs - mlst2phyloviz library root

//! # mlst2phyloviz - MLST results to PhyloViz/eBurst allelic profiles
//!
//! Reads typing results produced by [tseemann/mlst](https://github.com/tseemann/mlst),
//! standardises on a single scheme and writes an ST-indexed allelic profile table.
//!
//! ## Pipeline
//!
//! - **Loaders**: one result file per sample (strict structure checks) or one
//!   concatenated summary table (column count checks only)
//! - **Locus header**: locus names from a header row, from `locus(value)` cells,
//!   or positional placeholders
//! - **Scheme selection**: explicit scheme or majority vote, with a warning when
//!   the target scheme covers less than 75% of samples
//! - **Classification**: accepted, other scheme, or failed typing (novel,
//!   partial or missing alleles, unresolved ST)
//! - **Output**: profile table sorted by ST, plus optional reject tables
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mlst2phyloviz::prelude::*;
//! use std::path::PathBuf;
//!
//! let config = RunConfig {
//!     input: InputSource::Summary(PathBuf::from("mlst_summary.tsv")),
//!     scheme_override: None,
//!     loci_count: 7,
//!     sinks: OutputSinks {
//!         profiles: PathBuf::from("allelic_profiles.tsv"),
//!         other_scheme: None,
//!         failed: Some(PathBuf::from("failed.tsv")),
//!     },
//!     include_filename: false,
//!     report: None,
//!     quiet: false,
//! };
//! let summary = run_pipeline(&config)?;
//! println!("{} samples accepted", summary.partition.accepted.len());
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args};
    pub use crate::core::{classify, partition_records, run_pipeline, select_scheme};
    pub use crate::core::{Classification, InputSource, Partition, RunConfig, SchemeSelection};
    pub use crate::data::{AlleleCall, LocusHeader, SampleRecord, SequenceType};
    pub use crate::data::{ParseDiagnostic, ParseErrorKind, RecordLoader};
    pub use crate::output::{write_tsv, OutputSinks, ProfileTable, RunReport};
}

// Re-export main types at the root level for convenience
pub use crate::core::{Classification, InputSource, RunConfig};
pub use crate::data::{LocusHeader, SampleRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "mlst2phyloviz v{} - MLST results to PhyloViz/eBurst allelic profiles",
        VERSION
    )
}
