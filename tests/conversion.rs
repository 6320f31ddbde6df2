// conversion.rs - End-to-end runs over per-sample files and summary tables

use mlst2phyloviz::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const LEGACY_HEADER: &str = "FILE\tSCHEME\tST\taroA\tcpn60\tdpr\trecA\tthrA\tgki\tmutS\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn row(label: &str, scheme: &str, st: &str, alleles: [&str; 7]) -> String {
    format!("{}\t{}\t{}\t{}\n", label, scheme, st, alleles.join("\t"))
}

fn files_config(paths: Vec<PathBuf>, out_dir: &Path) -> RunConfig {
    RunConfig {
        input: InputSource::Files(paths),
        scheme_override: None,
        loci_count: 7,
        sinks: OutputSinks {
            profiles: out_dir.join("allelic_profiles.tsv"),
            other_scheme: Some(out_dir.join("other_scheme.tsv")),
            failed: Some(out_dir.join("failed.tsv")),
        },
        include_filename: false,
        report: Some(out_dir.join("report.json")),
        quiet: true,
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_per_sample_files_end_to_end() {
    let dir = tempdir().unwrap();
    let paths = vec![
        write_file(
            &dir,
            "s1.tsv",
            &row("s1.fa", "ssuis", "23", ["2", "1", "1", "1", "9", "4", "12"]),
        ),
        write_file(
            &dir,
            "s2.tsv",
            &row("s2.fa", "ssuis", "1", ["1", "1", "1", "1", "1", "1", "1"]),
        ),
        write_file(
            &dir,
            "s3.tsv",
            &row("s3.fa", "ssuis", "-", ["1", "1", "-", "1", "1", "1", "1"]),
        ),
        write_file(
            &dir,
            "s4.tsv",
            &row("s4.fa", "other_scheme", "5", ["1", "1", "1", "1", "1", "1", "1"]),
        ),
        write_file(
            &dir,
            "s5.tsv",
            &format!(
                "{}{}",
                row("s5.fa", "ssuis", "1", ["1", "1", "1", "1", "1", "1", "1"]),
                row("s5b.fa", "ssuis", "1", ["1", "1", "1", "1", "1", "1", "1"])
            ),
        ),
        write_file(&dir, "s6.tsv", ""),
    ];

    let out_dir = dir.path().join("out");
    let config = files_config(paths, &out_dir);
    let summary = run_pipeline(&config).unwrap();

    assert_eq!(summary.selection.target, "ssuis");
    assert_eq!(summary.partition.total(), 4);
    assert_eq!(summary.partition.accepted.len(), 2);
    assert_eq!(summary.partition.failed.len(), 1);
    assert_eq!(summary.partition.other_scheme.len(), 1);

    let skipped: Vec<&str> = summary.diagnostics.iter().map(|d| d.source.as_str()).collect();
    assert_eq!(skipped, vec!["s5.tsv", "s6.tsv"]);
    assert_eq!(
        summary.diagnostics[0].kind,
        ParseErrorKind::MultipleDataRows { found: 2 }
    );

    let profiles = read_lines(&config.sinks.profiles);
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].split('\t').count(), 1 + 7);
    assert_eq!(profiles[1], "1\t1\t1\t1\t1\t1\t1\t1");
    assert_eq!(profiles[2], "23\t2\t1\t1\t1\t9\t4\t12");

    let failed = read_lines(&out_dir.join("failed.tsv"));
    assert_eq!(failed[1], "s3.tsv\tssuis\t-\t1\t1\t-\t1\t1\t1\t1");

    let other = read_lines(&out_dir.join("other_scheme.tsv"));
    assert_eq!(other.len(), 2);
    assert!(other[1].starts_with("s4.tsv\tother_scheme\t5"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("report.json")).unwrap()).unwrap();
    assert_eq!(report["input_mode"], "files");
    assert_eq!(report["buckets"]["accepted"], 2);
    assert_eq!(report["skipped_inputs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_legacy_header_and_cell_names() {
    let dir = tempdir().unwrap();
    let with_header = write_file(
        &dir,
        "a.tsv",
        &format!(
            "{}{}",
            LEGACY_HEADER,
            row("a.fa", "ssuis", "3", ["1", "2", "3", "4", "5", "6", "7"])
        ),
    );
    let with_cells = write_file(
        &dir,
        "b.tsv",
        &row(
            "b.fa",
            "ssuis",
            "16",
            ["aroA(2)", "cpn60(~1)", "dpr(1)", "recA(1)", "thrA(1)", "gki(1)", "mutS(1)"],
        ),
    );

    let config = files_config(vec![with_header, with_cells], dir.path());
    let summary = run_pipeline(&config).unwrap();

    assert_eq!(
        summary.header.loci_names,
        vec!["aroA", "cpn60", "dpr", "recA", "thrA", "gki", "mutS"]
    );
    assert_eq!(summary.partition.accepted.len(), 1);
    assert_eq!(summary.partition.failed.len(), 1);

    let profiles = read_lines(&config.sinks.profiles);
    assert_eq!(profiles[0], "ST\taroA\tcpn60\tdpr\trecA\tthrA\tgki\tmutS");
    assert_eq!(profiles[1], "3\t1\t2\t3\t4\t5\t6\t7");

    let failed = read_lines(&dir.path().join("failed.tsv"));
    assert!(failed[1].contains("cpn60(~1)"));
}

#[test]
fn test_summary_with_override_absent_from_data() {
    let dir = tempdir().unwrap();
    let summary_path = write_file(
        &dir,
        "summary.tsv",
        &format!(
            "{}{}",
            row("s1.fa", "ssuis", "1", ["1", "1", "1", "1", "1", "1", "1"]),
            row("s2.fa", "ssuis", "2", ["2", "1", "1", "1", "1", "1", "1"])
        ),
    );

    let config = RunConfig {
        input: InputSource::Summary(summary_path),
        scheme_override: Some("saureus".to_string()),
        include_filename: true,
        report: None,
        ..files_config(vec![], dir.path())
    };
    let summary = run_pipeline(&config).unwrap();

    assert_eq!(summary.selection.coverage, 0.0);
    assert!(summary.selection.below_threshold());
    assert!(summary.partition.accepted.is_empty());
    assert_eq!(summary.partition.other_scheme.len(), 2);

    let profiles = read_lines(&config.sinks.profiles);
    assert_eq!(
        profiles,
        vec!["filename\tscheme\tST\tlocus_1\tlocus_2\tlocus_3\tlocus_4\tlocus_5\tlocus_6\tlocus_7"]
    );
}

#[test]
fn test_duplicate_sts_are_kept() {
    let dir = tempdir().unwrap();
    let summary_path = write_file(
        &dir,
        "summary.tsv",
        &format!(
            "{}{}{}",
            row("s1.fa", "ssuis", "7", ["1", "1", "1", "1", "1", "1", "1"]),
            row("s2.fa", "ssuis", "2", ["2", "2", "2", "2", "2", "2", "2"]),
            row("s3.fa", "ssuis", "7", ["1", "1", "1", "1", "1", "1", "1"])
        ),
    );

    let config = RunConfig {
        input: InputSource::Summary(summary_path),
        ..files_config(vec![], dir.path())
    };
    let summary = run_pipeline(&config).unwrap();

    assert_eq!(summary.written.profiles, 3);
    let sts: Vec<String> = read_lines(&config.sinks.profiles)
        .iter()
        .skip(1)
        .map(|l| l.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(sts, vec!["2", "7", "7"]);
}
