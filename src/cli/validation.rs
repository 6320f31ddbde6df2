// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{InputSource, RunConfig};
use crate::data::UNTYPED_SCHEMES;
use crate::output::OutputSinks;
use std::collections::HashSet;
use std::path::PathBuf;

/// Loci in a classic MLST scheme
pub const DEFAULT_LOCI: usize = 7;

/// Default PhyloViz profile output
pub const DEFAULT_OUTPUT: &str = "allelic_profiles.tsv";

/// Validate all command line arguments and build the run configuration
pub fn validate_args(args: &Args) -> Result<RunConfig, String> {
    // Exactly one input mode
    let input = match (args.mlst_files.is_empty(), &args.mlst_summary) {
        (false, None) => InputSource::Files(args.mlst_files.iter().map(PathBuf::from).collect()),
        (true, Some(summary)) => InputSource::Summary(PathBuf::from(summary)),
        _ => {
            return Err(
                "Need to set exactly one of either --mlst-files or --mlst-summary".to_string(),
            )
        }
    };

    let loci_count = args.loci.unwrap_or(DEFAULT_LOCI);
    if loci_count == 0 {
        return Err("--loci must be at least 1".to_string());
    }

    let scheme_override = match &args.scheme {
        Some(scheme) if scheme.trim().is_empty() => {
            return Err("--scheme must not be empty".to_string())
        }
        Some(scheme) if UNTYPED_SCHEMES.contains(&scheme.trim()) => {
            return Err(format!(
                "--scheme must name a typing scheme, not the untyped marker '{}'",
                scheme.trim()
            ))
        }
        Some(scheme) => Some(scheme.trim().to_string()),
        None => None,
    };

    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    let sinks = OutputSinks {
        profiles: PathBuf::from(args.out.as_deref().unwrap_or(DEFAULT_OUTPUT)),
        other_scheme: args.other_scheme_out.as_ref().map(PathBuf::from),
        failed: args.failed_out.as_ref().map(PathBuf::from),
    };
    let report = args.report.as_ref().map(PathBuf::from);

    // No two outputs may overwrite each other
    let mut seen = HashSet::new();
    let outputs = std::iter::once(&sinks.profiles)
        .chain(sinks.other_scheme.iter())
        .chain(sinks.failed.iter())
        .chain(report.iter());
    for path in outputs {
        if !seen.insert(path) {
            return Err(format!(
                "Output path '{}' is used for more than one output",
                path.display()
            ));
        }
    }

    Ok(RunConfig {
        input,
        scheme_override,
        loci_count,
        sinks,
        include_filename: args.include_filename,
        report,
        quiet: args.quiet,
    })
}
