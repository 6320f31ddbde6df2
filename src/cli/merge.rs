// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input: the file list and the summary are one choice, so only fill
        // from the config when the command line chose neither
        if self.mlst_files.is_empty() && self.mlst_summary.is_none() {
            self.mlst_files = config.mlst_files.unwrap_or_default();
            self.mlst_summary = config.mlst_summary;
        }

        // Scheme
        if self.scheme.is_none() {
            self.scheme = config.scheme;
        }
        if self.loci.is_none() {
            self.loci = config.loci;
        }

        // Output
        if self.out.is_none() {
            self.out = config.out;
        }
        if self.other_scheme_out.is_none() {
            self.other_scheme_out = config.other_scheme_out;
        }
        if self.failed_out.is_none() {
            self.failed_out = config.failed_out;
        }
        if self.report.is_none() {
            self.report = config.report;
        }

        // Runtime
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.include_filename && config.include_filename.unwrap_or(false) {
            self.include_filename = true;
        }
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
