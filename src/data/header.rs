// header.rs - Locus header derivation

use crate::data::record::SampleRecord;

/// Ordered locus names shared by every output row of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusHeader {
    pub loci_names: Vec<String>,
}

impl LocusHeader {
    /// Derive the header from the first record in input order.
    ///
    /// Name sources, in order of preference: a header row found in the input,
    /// `locus(value)` cells of the template record, positional `locus_N` names.
    pub fn build(
        records: &[SampleRecord],
        embedded_header: Option<&[String]>,
        loci_count: usize,
    ) -> Result<Self, String> {
        let template = records
            .first()
            .ok_or("Cannot build locus header: no records were parsed")?;

        if template.alleles.len() != loci_count {
            return Err(format!(
                "Configured loci count ({}) does not match the {} allele columns of '{}'",
                loci_count,
                template.alleles.len(),
                template.source_label
            ));
        }

        if let Some(names) = embedded_header {
            if names.len() == loci_count {
                return Ok(Self {
                    loci_names: names.to_vec(),
                });
            }
            eprintln!(
                "⚠️  WARNING: header row has {} loci but {} are configured; ignoring it",
                names.len(),
                loci_count
            );
        }

        let loci_names = template
            .embedded_locus_names()
            .unwrap_or_else(|| (1..=loci_count).map(|i| format!("locus_{}", i)).collect());

        Ok(Self { loci_names })
    }

    pub fn len(&self) -> usize {
        self.loci_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci_names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alleles: &[&str]) -> SampleRecord {
        SampleRecord {
            source_label: "a.tsv".to_string(),
            scheme: "ssuis".to_string(),
            sequence_type: "1".to_string(),
            alleles: alleles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_names_from_cells() {
        let records = vec![record(&["aroA(1)", "cpn60(2)", "dpr(3)"])];
        let header = LocusHeader::build(&records, None, 3).unwrap();
        assert_eq!(header.loci_names, vec!["aroA", "cpn60", "dpr"]);
    }

    #[test]
    fn test_placeholder_names() {
        let records = vec![record(&["1", "2", "3"])];
        let header = LocusHeader::build(&records, None, 3).unwrap();
        assert_eq!(header.loci_names, vec!["locus_1", "locus_2", "locus_3"]);
    }

    #[test]
    fn test_header_row_preferred() {
        let records = vec![record(&["aroA(1)", "cpn60(2)"])];
        let names = vec!["geneA".to_string(), "geneB".to_string()];
        let header = LocusHeader::build(&records, Some(names.as_slice()), 2).unwrap();
        assert_eq!(header.loci_names, names);
    }

    #[test]
    fn test_header_row_of_wrong_width_is_ignored() {
        let records = vec![record(&["aroA(1)", "cpn60(2)"])];
        let names = vec!["geneA".to_string()];
        let header = LocusHeader::build(&records, Some(names.as_slice()), 2).unwrap();
        assert_eq!(header.loci_names, vec!["aroA", "cpn60"]);
    }

    #[test]
    fn test_loci_count_mismatch_is_error() {
        let records = vec![record(&["1", "2", "3"])];
        let err = LocusHeader::build(&records, None, 7).unwrap_err();
        assert!(err.contains("loci count (7)"));
    }

    #[test]
    fn test_no_records_is_error() {
        assert!(LocusHeader::build(&[], None, 7).is_err());
    }
}
