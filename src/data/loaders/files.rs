// files.rs - Loader for one mlst result file per sample

use super::{header_loci, ParseDiagnostic, ParseErrorKind, ParsedBatch, RecordLoader};
use crate::data::record::{is_header_row, split_fields, SampleRecord};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// A record parsed from one file, plus the header row the file carried, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub record: SampleRecord,
    pub header: Option<Vec<String>>,
}

/// Parse the full contents of one per-sample mlst file.
///
/// The file must hold exactly one data row with `3 + loci_count` columns;
/// an optional `FILE SCHEME ST ...` header row does not count as data.
pub fn parse_sample_file(
    source_label: &str,
    contents: &str,
    loci_count: usize,
) -> Result<ParsedFile, ParseErrorKind> {
    if contents.trim().is_empty() {
        return Err(ParseErrorKind::EmptyFile);
    }

    let mut header = None;
    let mut data_rows = Vec::new();
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let fields = split_fields(line);
        if is_header_row(&fields) {
            if header.is_none() {
                header = Some(header_loci(&fields));
            }
        } else {
            data_rows.push(fields);
        }
    }

    let fields = match data_rows.len() {
        0 => return Err(ParseErrorKind::NoDataRows),
        1 => data_rows.remove(0),
        n => return Err(ParseErrorKind::MultipleDataRows { found: n }),
    };

    let expected = 3 + loci_count;
    if fields.len() != expected {
        return Err(ParseErrorKind::FieldCount {
            found: fields.len(),
            expected,
        });
    }

    Ok(ParsedFile {
        record: SampleRecord::from_fields(source_label.to_string(), &fields),
        header,
    })
}

/// Label used for a sample file in records and diagnostics
fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads each file fully and independently; files are parsed in parallel and
/// results are collected back in input order.
#[derive(Debug, Clone)]
pub struct PerSampleFiles {
    pub paths: Vec<PathBuf>,
}

impl PerSampleFiles {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn parse_path(path: &Path, loci_count: usize) -> Result<ParsedFile, ParseDiagnostic> {
        let label = file_label(path);
        let contents = fs::read_to_string(path).map_err(|e| ParseDiagnostic {
            source: label.clone(),
            kind: ParseErrorKind::Unreadable {
                reason: e.to_string(),
            },
        })?;
        parse_sample_file(&label, &contents, loci_count).map_err(|kind| ParseDiagnostic {
            source: label,
            kind,
        })
    }
}

impl RecordLoader for PerSampleFiles {
    fn mode(&self) -> &'static str {
        "files"
    }

    fn load(&self, loci_count: usize, show_progress: bool) -> Result<ParsedBatch, String> {
        if self.paths.is_empty() {
            return Err("No mlst files given".to_string());
        }

        let pb = if show_progress {
            let pb = ProgressBar::new(self.paths.len() as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
                )
                .map_err(|e| format!("Invalid progress template: {}", e))?,
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        // Indexed parallel iterators keep input order on collect
        let results: Vec<Result<ParsedFile, ParseDiagnostic>> = self
            .paths
            .par_iter()
            .map(|path| {
                let result = Self::parse_path(path, loci_count);
                pb.inc(1);
                result
            })
            .collect();
        pb.finish_and_clear();

        let mut batch = ParsedBatch::default();
        for result in results {
            match result {
                Ok(parsed) => {
                    if batch.embedded_header.is_none() {
                        batch.embedded_header = parsed.header;
                    }
                    batch.records.push(parsed.record);
                }
                Err(diag) => batch.diagnostics.push(diag),
            }
        }

        Ok(batch)
    }
}
