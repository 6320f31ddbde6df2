// summary.rs - Loader for a concatenated mlst summary table

use super::{header_loci, ParseDiagnostic, ParseErrorKind, ParsedBatch, RecordLoader};
use crate::data::record::{is_header_row, split_fields, SampleRecord};
use std::fs;
use std::path::PathBuf;

/// Outcome of one summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLine {
    Record(SampleRecord),
    Header(Vec<String>),
    Blank,
}

/// Parse one line of a summary table. The sample label is the first column.
pub fn parse_summary_line(line: &str, loci_count: usize) -> Result<SummaryLine, ParseErrorKind> {
    if line.trim().is_empty() {
        return Ok(SummaryLine::Blank);
    }

    let fields = split_fields(line);
    if is_header_row(&fields) {
        return Ok(SummaryLine::Header(header_loci(&fields)));
    }

    let expected = 3 + loci_count;
    if fields.len() != expected {
        return Err(ParseErrorKind::FieldCount {
            found: fields.len(),
            expected,
        });
    }

    Ok(SummaryLine::Record(SampleRecord::from_fields(
        fields[0].trim().to_string(),
        &fields,
    )))
}

/// One file, one row per sample, as produced by `cat *.mlst.tsv`.
/// Rows are trusted apart from their column count.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    pub path: PathBuf,
}

impl SummaryTable {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordLoader for SummaryTable {
    fn mode(&self) -> &'static str {
        "summary"
    }

    fn load(&self, loci_count: usize, _show_progress: bool) -> Result<ParsedBatch, String> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            format!(
                "Failed to read mlst summary '{}': {}",
                self.path.display(),
                e
            )
        })?;

        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("summary");

        let mut batch = ParsedBatch::default();
        for (line_num, line) in contents.lines().enumerate() {
            match parse_summary_line(line, loci_count) {
                Ok(SummaryLine::Record(record)) => batch.records.push(record),
                Ok(SummaryLine::Header(names)) => {
                    if batch.embedded_header.is_none() {
                        batch.embedded_header = Some(names);
                    }
                }
                Ok(SummaryLine::Blank) => {}
                Err(kind) => batch.diagnostics.push(ParseDiagnostic {
                    source: format!("{}:{}", name, line_num + 1),
                    kind,
                }),
            }
        }

        Ok(batch)
    }
}
