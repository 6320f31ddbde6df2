// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// mlst2phyloviz - Convert tseemann/mlst output for PhyloViz/eBurst analysis.
/// Use separate mlst files (--mlst-files) and the scheme's number of loci (--loci)
/// for the strictest parsing.
pub struct Args {
    /// mlst output file, one per sample (repeat for each file)
    #[argh(option)]
    pub mlst_files: Vec<String>,

    /// summary of mlst files, obtained through cat
    #[argh(option)]
    pub mlst_summary: Option<String>,

    /// scheme to parse results for (default: most common scheme)
    #[argh(option)]
    pub scheme: Option<String>,

    /// output file for PhyloViz/eBurst (default: allelic_profiles.tsv)
    #[argh(option)]
    pub out: Option<String>,

    /// output file for samples not typed with the selected scheme (default: not written)
    #[argh(option)]
    pub other_scheme_out: Option<String>,

    /// output file for samples with failed allele calls or novel STs (default: not written)
    #[argh(option)]
    pub failed_out: Option<String>,

    /// number of loci in the MLST scheme (default: 7)
    #[argh(option)]
    pub loci: Option<usize>,

    /// include file name and scheme columns in the output; the file is then no longer directly PhyloViz compatible
    #[argh(switch)]
    pub include_filename: bool,

    /// write a JSON run report to this path
    #[argh(option)]
    pub report: Option<String>,

    /// number of threads for parsing mlst files (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// only print warnings and errors
    #[argh(switch)]
    pub quiet: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
