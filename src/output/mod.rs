// mod.rs - Profile table assembly and TSV writers

pub mod report;

use crate::core::Partition;
use crate::data::{LocusHeader, SampleRecord};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

pub use report::RunReport;

/// Rectangular table ready to be written as TSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ProfileTable {
    /// PhyloViz allelic profile table: `ST` and one column per locus, sorted by ST.
    ///
    /// Records sharing an ST each keep their own row. With `include_filename`
    /// the `filename` and `scheme` columns are prepended, which PhyloViz itself
    /// does not accept.
    pub fn profiles(accepted: &[SampleRecord], header: &LocusHeader, include_filename: bool) -> Self {
        let mut columns = Vec::with_capacity(header.len() + 3);
        if include_filename {
            columns.push("filename".to_string());
            columns.push("scheme".to_string());
        }
        columns.push("ST".to_string());
        columns.extend(header.loci_names.iter().cloned());

        let mut sorted: Vec<&SampleRecord> = accepted.iter().collect();
        sorted.sort_by(|a, b| {
            let (a_st, b_st) = (a.sequence_type(), b.sequence_type());
            a_st.sort_key().cmp(&b_st.sort_key())
        });

        let rows = sorted
            .into_iter()
            .map(|record| {
                let mut row = Vec::with_capacity(columns.len());
                if include_filename {
                    row.push(record.source_label.clone());
                    row.push(record.scheme.clone());
                }
                row.push(record.sequence_type.clone());
                row.extend(record.allele_values());
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Rejected records with their original cell values, in input order
    pub fn rejects<'a, I>(records: I, header: &LocusHeader) -> Self
    where
        I: IntoIterator<Item = &'a SampleRecord>,
    {
        let mut columns = vec![
            "filename".to_string(),
            "scheme".to_string(),
            "ST".to_string(),
        ];
        columns.extend(header.loci_names.iter().cloned());

        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = vec![
                    record.source_label.clone(),
                    record.scheme.clone(),
                    record.sequence_type.clone(),
                ];
                row.extend(record.alleles.iter().cloned());
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Write a table as tab-separated text with a single header row
pub fn write_tsv(file_path: &Path, table: &ProfileTable) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_path(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;

    writer
        .write_record(&table.columns)
        .map_err(|e| format!("Write error: {}", e))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Where each bucket goes. The profile table is always written; the reject
/// tables only when a path is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSinks {
    pub profiles: PathBuf,
    pub other_scheme: Option<PathBuf>,
    pub failed: Option<PathBuf>,
}

/// Row counts actually written per sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenCounts {
    pub profiles: usize,
    pub other_scheme: Option<usize>,
    pub failed: Option<usize>,
    /// Untyped records left out of the other-scheme table
    pub untyped_omitted: usize,
}

impl OutputSinks {
    pub fn write_all(
        &self,
        header: &LocusHeader,
        partition: &Partition,
        include_filename: bool,
    ) -> Result<WrittenCounts, String> {
        let profiles = ProfileTable::profiles(&partition.accepted, header, include_filename);
        write_tsv(&self.profiles, &profiles)?;

        let untyped_omitted = partition
            .other_scheme
            .iter()
            .filter(|r| r.is_untyped())
            .count();

        let other_scheme = match &self.other_scheme {
            Some(path) => {
                let table = ProfileTable::rejects(
                    partition.other_scheme.iter().filter(|r| !r.is_untyped()),
                    header,
                );
                write_tsv(path, &table)?;
                Some(table.len())
            }
            None => None,
        };

        let failed = match &self.failed {
            Some(path) => {
                let table = ProfileTable::rejects(&partition.failed, header);
                write_tsv(path, &table)?;
                Some(table.len())
            }
            None => None,
        };

        Ok(WrittenCounts {
            profiles: profiles.len(),
            other_scheme,
            failed,
            untyped_omitted,
        })
    }
}
