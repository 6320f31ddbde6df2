// record.rs - Per-sample typing record

use crate::data::allele::{split_cell, SequenceType};

/// Scheme values mlst writes when no scheme matched the sample.
pub const UNTYPED_SCHEMES: &[&str] = &["", "-"];

/// One row of mlst output: source, scheme, ST and the raw allele cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    pub source_label: String,
    pub scheme: String,
    pub sequence_type: String,
    pub alleles: Vec<String>,
}

impl SampleRecord {
    /// Build a record from already split fields: label, scheme, ST, alleles...
    ///
    /// Callers must have checked that `fields.len() == 3 + loci_count`.
    pub fn from_fields(source_label: String, fields: &[&str]) -> Self {
        Self {
            source_label,
            scheme: fields[1].trim().to_string(),
            sequence_type: fields[2].trim().to_string(),
            alleles: fields[3..].iter().map(|s| s.trim().to_string()).collect(),
        }
    }

    pub fn is_untyped(&self) -> bool {
        UNTYPED_SCHEMES.contains(&self.scheme.as_str())
    }

    pub fn sequence_type(&self) -> SequenceType {
        SequenceType::parse(&self.sequence_type)
    }

    /// Locus names embedded in `locus(value)` cells, if every cell carries one
    pub fn embedded_locus_names(&self) -> Option<Vec<String>> {
        self.alleles
            .iter()
            .map(|cell| split_cell(cell).0.map(str::to_string))
            .collect()
    }

    /// Allele values with any locus prefix stripped
    pub fn allele_values(&self) -> Vec<String> {
        self.alleles
            .iter()
            .map(|cell| split_cell(cell).1.to_string())
            .collect()
    }
}

/// Split one line of mlst output. mlst writes tabs; lines without tabs fall back to
/// whitespace so hand-edited files still parse.
pub fn split_fields(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// mlst --legacy writes `FILE SCHEME ST locus...` before the data row.
pub fn is_header_row(fields: &[&str]) -> bool {
    fields
        .get(2)
        .map(|st| st.trim().eq_ignore_ascii_case("ST"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alleles: &[&str]) -> SampleRecord {
        SampleRecord {
            source_label: "s1.fasta".to_string(),
            scheme: "ssuis".to_string(),
            sequence_type: "1".to_string(),
            alleles: alleles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_fields() {
        let fields = split_fields("s1.fa\tssuis\t1\taroA(1)\tcpn60(1)\n");
        let rec = SampleRecord::from_fields("s1.fa".to_string(), &fields);
        assert_eq!(rec.scheme, "ssuis");
        assert_eq!(rec.sequence_type, "1");
        assert_eq!(rec.alleles, vec!["aroA(1)", "cpn60(1)"]);
    }

    #[test]
    fn test_split_fields_keeps_empty_tab_cells() {
        let fields = split_fields("s1\t-\t\t1\t2");
        assert_eq!(fields, vec!["s1", "-", "", "1", "2"]);
        let fields = split_fields("s1 ssuis 1  2 3\r\n");
        assert_eq!(fields, vec!["s1", "ssuis", "1", "2", "3"]);
    }

    #[test]
    fn test_embedded_locus_names() {
        let rec = record(&["aroA(1)", "cpn60(~2)"]);
        assert_eq!(
            rec.embedded_locus_names(),
            Some(vec!["aroA".to_string(), "cpn60".to_string()])
        );
        assert_eq!(rec.allele_values(), vec!["1", "~2"]);

        let bare = record(&["1", "cpn60(2)"]);
        assert_eq!(bare.embedded_locus_names(), None);
    }

    #[test]
    fn test_header_row_detection() {
        assert!(is_header_row(&["FILE", "SCHEME", "ST", "aroA"]));
        assert!(!is_header_row(&["s1", "ssuis", "1", "1"]));
        assert!(!is_header_row(&["s1"]));
    }

    #[test]
    fn test_untyped() {
        let mut rec = record(&["1"]);
        assert!(!rec.is_untyped());
        rec.scheme = "-".to_string();
        assert!(rec.is_untyped());
    }
}
