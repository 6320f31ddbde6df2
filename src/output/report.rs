// report.rs - JSON run report

use crate::core::SchemeSelection;
use crate::data::ParseDiagnostic;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct BucketCounts {
    pub accepted: usize,
    pub other_scheme: usize,
    pub failed: usize,
}

/// Machine-readable summary of one conversion run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub tool_version: String,
    pub generated: String,
    pub input_mode: String,
    pub loci_count: usize,
    pub loci_names: Vec<String>,
    pub records_parsed: usize,
    pub target_scheme: String,
    pub scheme_overridden: bool,
    pub coverage: f64,
    pub coverage_warning: bool,
    pub scheme_counts: Vec<(String, usize)>,
    pub buckets: BucketCounts,
    pub skipped_inputs: Vec<ParseDiagnostic>,
}

impl RunReport {
    pub fn new(
        input_mode: &str,
        loci_names: &[String],
        selection: &SchemeSelection,
        buckets: BucketCounts,
        skipped_inputs: &[ParseDiagnostic],
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now().to_rfc3339(),
            input_mode: input_mode.to_string(),
            loci_count: loci_names.len(),
            loci_names: loci_names.to_vec(),
            records_parsed: selection.tally.total_records(),
            target_scheme: selection.target.clone(),
            scheme_overridden: selection.overridden,
            coverage: selection.coverage,
            coverage_warning: selection.below_threshold(),
            scheme_counts: selection
                .tally
                .iter()
                .map(|(name, n)| (name.to_string(), n))
                .collect(),
            buckets,
            skipped_inputs: skipped_inputs.to_vec(),
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<(), String> {
        let file = File::create(path)
            .map_err(|e| format!("Failed to create report file '{}': {}", path.display(), e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| format!("Failed to write report '{}': {}", path.display(), e))
    }
}
