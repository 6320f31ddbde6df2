// scheme.rs - Scheme tally and target scheme selection

use crate::data::SampleRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Coverage below this fraction triggers a warning
pub const COVERAGE_WARNING_THRESHOLD: f64 = 0.75;

/// Number of records per scheme, in first-encountered order.
/// Untyped records (`-` or empty scheme) are counted in the total only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemeTally {
    counts: Vec<(String, usize)>,
    total_records: usize,
}

impl SchemeTally {
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records.iter().filter(|r| !r.is_untyped()) {
            match index.get(record.scheme.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(record.scheme.as_str(), counts.len());
                    counts.push((record.scheme.clone(), 1));
                }
            }
        }

        Self {
            counts,
            total_records: records.len(),
        }
    }

    pub fn count(&self, scheme: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == scheme)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Most frequent scheme; ties go to the scheme seen first
    pub fn majority(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, n)| (name.as_str(), *n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Target scheme of a run and how much of the input it covers
#[derive(Debug, Clone, Serialize)]
pub struct SchemeSelection {
    pub target: String,
    pub overridden: bool,
    pub coverage: f64,
    pub tally: SchemeTally,
}

impl SchemeSelection {
    pub fn below_threshold(&self) -> bool {
        self.coverage < COVERAGE_WARNING_THRESHOLD
    }

    /// Warning text when coverage is below the threshold
    pub fn warning(&self) -> Option<String> {
        if !self.below_threshold() {
            return None;
        }
        Some(format!(
            "the selected scheme {} applies to {:.2}% of the dataset ({}/{} samples)",
            self.target,
            self.coverage * 100.0,
            self.tally.count(&self.target),
            self.tally.total_records()
        ))
    }
}

/// Pick the target scheme: the override if given, otherwise the majority scheme.
///
/// An override that matches no record is allowed and yields zero coverage.
/// When no record carries a scheme the untyped marker becomes the target,
/// which no record can match.
pub fn select_scheme(
    records: &[SampleRecord],
    scheme_override: Option<&str>,
) -> Result<SchemeSelection, String> {
    let tally = SchemeTally::from_records(records);

    let (target, overridden) = match scheme_override {
        Some(scheme) => (scheme.to_string(), true),
        None => match tally.majority() {
            Some(majority) => (majority.to_string(), false),
            // Every record is untyped: keep its marker as the target so the run
            // still writes a header-only table and reports zero coverage.
            None => (
                records
                    .first()
                    .map(|r| r.scheme.clone())
                    .unwrap_or_default(),
                false,
            ),
        },
    };

    let coverage = if tally.total_records() == 0 {
        0.0
    } else {
        tally.count(&target) as f64 / tally.total_records() as f64
    };

    Ok(SchemeSelection {
        target,
        overridden,
        coverage,
        tally,
    })
}
