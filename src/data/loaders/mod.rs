// mod.rs - Record loaders for the two mlst input shapes

pub mod files;
pub mod summary;

use crate::data::record::SampleRecord;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub use files::PerSampleFiles;
pub use summary::SummaryTable;

/// Why an input unit produced no record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseErrorKind {
    Unreadable { reason: String },
    EmptyFile,
    NoDataRows,
    MultipleDataRows { found: usize },
    FieldCount { found: usize, expected: usize },
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Unreadable { reason } => write!(f, "could not be read ({})", reason),
            ParseErrorKind::EmptyFile => write!(f, "is an empty file"),
            ParseErrorKind::NoDataRows => write!(f, "has no data row"),
            ParseErrorKind::MultipleDataRows { found } => {
                write!(f, "has {} data rows, expected exactly 1", found)
            }
            ParseErrorKind::FieldCount { found, expected } => {
                write!(f, "has {} columns, expected {}", found, expected)
            }
        }
    }
}

/// A skipped input unit, named by file (or file:line for summary rows)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub source: String,
    #[serde(flatten)]
    pub kind: ParseErrorKind,
}

impl Display for ParseDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.source, self.kind)
    }
}

/// Everything a loader produced for one run, in input order
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub records: Vec<SampleRecord>,
    /// Locus names from the first `FILE SCHEME ST ...` header row seen, if any
    pub embedded_header: Option<Vec<String>>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Common interface of the per-file and summary-table loaders
pub trait RecordLoader: Send + Sync {
    /// Short name of the input mode, used in logs and the run report
    fn mode(&self) -> &'static str;

    /// Parse every input unit. Per-unit problems become diagnostics;
    /// only problems that make the whole input unusable are `Err`.
    fn load(&self, loci_count: usize, show_progress: bool) -> Result<ParsedBatch, String>;
}

/// Locus names from a header row, dropping the leading `FILE SCHEME ST` columns
pub(crate) fn header_loci(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .skip(3)
        .map(|s| s.trim().to_string())
        .collect()
}
