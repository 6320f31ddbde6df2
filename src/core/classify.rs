// classify.rs - Per-sample classification against the target scheme

use crate::data::{is_incomplete_allele, SampleRecord};
use serde::Serialize;

/// Bucket a record falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Target scheme, resolved ST and every allele called
    Accepted,
    /// Typed with a different scheme, or untyped
    OtherScheme,
    /// Target scheme but an unresolved ST or at least one incomplete allele
    Failed,
}

/// Classify one record. The scheme is checked first, so an `OtherScheme`
/// record is never inspected for completeness. Untyped records never match a
/// target, even one spelled like their marker.
pub fn classify(record: &SampleRecord, target_scheme: &str, loci_count: usize) -> Classification {
    if record.is_untyped() || record.scheme != target_scheme {
        return Classification::OtherScheme;
    }

    if !record.sequence_type().is_resolved() {
        return Classification::Failed;
    }

    if record.alleles.len() != loci_count || record.alleles.iter().any(|a| is_incomplete_allele(a)) {
        return Classification::Failed;
    }

    Classification::Accepted
}

/// Records split into the three buckets, each in input order
#[derive(Debug, Default)]
pub struct Partition {
    pub accepted: Vec<SampleRecord>,
    pub other_scheme: Vec<SampleRecord>,
    pub failed: Vec<SampleRecord>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.other_scheme.len() + self.failed.len()
    }
}

/// Classify every record and move it into its bucket.
///
/// Every scheme-matched record must have exactly `loci_count` alleles; a
/// mismatch means the loaders and the locus header disagree, which is an error.
pub fn partition_records(
    records: Vec<SampleRecord>,
    target_scheme: &str,
    loci_count: usize,
) -> Result<Partition, String> {
    let mut partition = Partition::default();

    for record in records {
        let matched = !record.is_untyped() && record.scheme == target_scheme;
        if matched && record.alleles.len() != loci_count {
            return Err(format!(
                "Record '{}' has {} alleles but the locus header has {}",
                record.source_label,
                record.alleles.len(),
                loci_count
            ));
        }

        match classify(&record, target_scheme, loci_count) {
            Classification::Accepted => partition.accepted.push(record),
            Classification::OtherScheme => partition.other_scheme.push(record),
            Classification::Failed => partition.failed.push(record),
        }
    }

    Ok(partition)
}
