// pipeline.rs - Parse, select, classify and write one conversion run

use crate::core::classify::{partition_records, Partition};
use crate::core::scheme::{select_scheme, SchemeSelection};
use crate::data::{LocusHeader, ParseDiagnostic, PerSampleFiles, RecordLoader, SummaryTable};
use crate::output::report::BucketCounts;
use crate::output::{OutputSinks, RunReport, WrittenCounts};
use std::path::PathBuf;

/// Which of the two input shapes a run reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One mlst result file per sample
    Files(Vec<PathBuf>),
    /// One concatenated mlst table
    Summary(PathBuf),
}

impl InputSource {
    pub fn loader(&self) -> Box<dyn RecordLoader> {
        match self {
            InputSource::Files(paths) => Box::new(PerSampleFiles::new(paths.clone())),
            InputSource::Summary(path) => Box::new(SummaryTable::new(path.clone())),
        }
    }
}

/// Fully validated settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub scheme_override: Option<String>,
    pub loci_count: usize,
    pub sinks: OutputSinks,
    pub include_filename: bool,
    pub report: Option<PathBuf>,
    pub quiet: bool,
}

/// What a run produced
#[derive(Debug)]
pub struct RunSummary {
    pub header: LocusHeader,
    pub selection: SchemeSelection,
    pub partition: Partition,
    pub written: WrittenCounts,
    pub diagnostics: Vec<ParseDiagnostic>,
}

pub fn run_pipeline(config: &RunConfig) -> Result<RunSummary, String> {
    let loader = config.input.loader();
    if !config.quiet {
        println!(
            "📂 Reading mlst results ({} mode, {} loci)",
            loader.mode(),
            config.loci_count
        );
    }

    let batch = loader.load(config.loci_count, !config.quiet)?;
    if !config.quiet {
        println!(
            "✅ Parsed {} records ({} inputs skipped)",
            batch.records.len(),
            batch.diagnostics.len()
        );
    }

    if batch.records.is_empty() {
        report_skipped(&batch.diagnostics);
        return Err("No MLST records could be parsed from the input".to_string());
    }

    let header = LocusHeader::build(
        &batch.records,
        batch.embedded_header.as_deref(),
        config.loci_count,
    )?;

    let selection = select_scheme(&batch.records, config.scheme_override.as_deref())?;
    if !config.quiet {
        println!(
            "🧬 Target scheme: {} ({}, {:.2}% of samples)",
            selection.target,
            if selection.overridden {
                "set explicitly"
            } else {
                "most common"
            },
            selection.coverage * 100.0
        );
    }
    if let Some(warning) = selection.warning() {
        eprintln!("⚠️  WARNING: {}", warning);
    }

    let partition = partition_records(batch.records, &selection.target, header.len())?;
    if !config.quiet {
        println!(
            "📊 Accepted: {}  Other scheme: {}  Failed typing: {}",
            partition.accepted.len(),
            partition.other_scheme.len(),
            partition.failed.len()
        );
    }
    if partition.accepted.is_empty() {
        eprintln!(
            "⚠️  WARNING: no sample passed; {} will only contain the header row",
            config.sinks.profiles.display()
        );
    }

    let written = config
        .sinks
        .write_all(&header, &partition, config.include_filename)?;
    if !config.quiet {
        println!(
            "📁 Allelic profiles written to: {} ({} rows)",
            config.sinks.profiles.display(),
            written.profiles
        );
        if let (Some(path), Some(rows)) = (&config.sinks.other_scheme, written.other_scheme) {
            println!(
                "📁 Other-scheme samples written to: {} ({} rows)",
                path.display(),
                rows
            );
            if written.untyped_omitted > 0 {
                println!(
                    "   ({} samples without any scheme were left out)",
                    written.untyped_omitted
                );
            }
        }
        if let (Some(path), Some(rows)) = (&config.sinks.failed, written.failed) {
            println!("📁 Failed typings written to: {} ({} rows)", path.display(), rows);
        }
    }

    if let Some(report_path) = &config.report {
        let report = RunReport::new(
            loader.mode(),
            &header.loci_names,
            &selection,
            BucketCounts {
                accepted: partition.accepted.len(),
                other_scheme: partition.other_scheme.len(),
                failed: partition.failed.len(),
            },
            &batch.diagnostics,
        );
        report.to_file(report_path)?;
        if !config.quiet {
            println!("📄 Run report written to: {}", report_path.display());
        }
    }

    report_skipped(&batch.diagnostics);

    Ok(RunSummary {
        header,
        selection,
        partition,
        written,
        diagnostics: batch.diagnostics,
    })
}

/// Print every skipped input once the run is over
fn report_skipped(diagnostics: &[ParseDiagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!("⚠️  Skipped {} inputs:", diagnostics.len());
    for diag in diagnostics {
        eprintln!("   - {}. Skipping...", diag);
    }
}
