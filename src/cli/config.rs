// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input
    pub mlst_files: Option<Vec<String>>,
    pub mlst_summary: Option<String>,

    // Scheme
    pub scheme: Option<String>,
    pub loci: Option<usize>,

    // Output
    pub out: Option<String>,
    pub other_scheme_out: Option<String>,
    pub failed_out: Option<String>,
    pub include_filename: Option<bool>,
    pub report: Option<String>,

    // Runtime
    pub threads: Option<usize>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mlst2phyloviz.toml - Configuration file for mlst2phyloviz
# Command line arguments will override these settings

# =============================================================================
# INPUT (set exactly one)
# =============================================================================

# Separate mlst output files, one per sample (checked strictly)
mlst_files = ["results/sample1.mlst.tsv", "results/sample2.mlst.tsv"]

# Summary of mlst files obtained through cat (only column counts are checked)
# mlst_summary = "mlst_summary.tsv"

# =============================================================================
# SCHEME
# =============================================================================

# Scheme to parse results for (omit to select the most common scheme)
# scheme = "ssuis"

# Number of loci in the MLST scheme
loci = 7

# =============================================================================
# OUTPUT
# =============================================================================

# Allelic profiles for PhyloViz/eBurst
out = "allelic_profiles.tsv"

# Samples typed with another scheme
# other_scheme_out = "other_scheme.tsv"

# Samples with failed allele calls or novel STs
# failed_out = "failed_alleles.tsv"

# Prepend filename and scheme columns (breaks direct PhyloViz compatibility)
include_filename = false

# JSON run report
# report = "run_report.json"

# =============================================================================
# RUNTIME
# =============================================================================

# Number of threads for parsing mlst files (omit for auto-detection)
# threads = 4

# Only print warnings and errors
quiet = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.loci, Some(7));
        assert_eq!(config.mlst_files.as_ref().map(|f| f.len()), Some(2));
        assert!(config.mlst_summary.is_none());
        assert_eq!(config.out.as_deref(), Some("allelic_profiles.tsv"));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        let config = Config {
            mlst_summary: Some("summary.tsv".to_string()),
            scheme: Some("ssuis".to_string()),
            loci: Some(8),
            ..Config::new()
        };
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.mlst_summary.as_deref(), Some("summary.tsv"));
        assert_eq!(loaded.scheme.as_deref(), Some("ssuis"));
        assert_eq!(loaded.loci, Some(8));
        assert!(loaded.mlst_files.is_none());
    }

    #[test]
    fn test_bad_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "loci = \"seven\"").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
