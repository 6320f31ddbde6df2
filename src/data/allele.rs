// allele.rs - Allele call and sequence type interpretation

use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Matches the `locus(value)` cell syntax written by tseemann/mlst, e.g. `abcZ(2)`.
fn cell_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| {
        Regex::new(r"^(?P<locus>[^()]*)\((?P<value>[^()]*)\)$").expect("static regex is valid")
    })
}

/// Split a raw allele cell into its optional locus name and its value.
///
/// `"abcZ(2)"` gives `(Some("abcZ"), "2")`, a bare `"2"` gives `(None, "2")`.
pub fn split_cell(raw: &str) -> (Option<&str>, &str) {
    let trimmed = raw.trim();
    match cell_regex().captures(trimmed) {
        Some(caps) => {
            let locus = caps.name("locus").map(|m| m.as_str().trim());
            let value = caps.name("value").map(|m| m.as_str().trim()).unwrap_or("");
            (locus.filter(|l| !l.is_empty()), value)
        }
        None => (None, trimmed),
    }
}

/// Interpretation of one allele cell.
///
/// Recognised sentinels:
/// - empty or `-`: no hit at this locus
/// - `~N`: novel full-length allele
/// - `N?`: partial match
/// - `N,M`: several candidate alleles
///
/// Anything else that is not a plain run of digits is `Unrecognised`. Called ids
/// keep their digits as written, so arbitrarily long ids stay resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlleleCall {
    Called(String),
    Novel,
    Partial,
    Multiple,
    Missing,
    Unrecognised,
}

impl AlleleCall {
    pub fn parse(raw: &str) -> Self {
        let (_, value) = split_cell(raw);

        if value.is_empty() || value == "-" {
            return AlleleCall::Missing;
        }
        if value.contains('~') {
            return AlleleCall::Novel;
        }
        if value.contains('?') {
            return AlleleCall::Partial;
        }
        if value.contains(',') {
            return AlleleCall::Multiple;
        }
        if !is_digits(value) {
            return AlleleCall::Unrecognised;
        }
        AlleleCall::Called(value.to_string())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, AlleleCall::Called(_))
    }

    pub fn as_id(&self) -> Option<&str> {
        match self {
            AlleleCall::Called(id) => Some(id),
            _ => None,
        }
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Orders digit strings by numeric value without parsing them into a fixed-width integer.
fn numeric_key(digits: &str) -> (usize, &str) {
    let significant = digits.trim_start_matches('0');
    (significant.len(), significant)
}

/// True when a raw allele cell cannot be used in an allelic profile.
pub fn is_incomplete_allele(raw: &str) -> bool {
    !AlleleCall::parse(raw).is_resolved()
}

/// Sequence type column: a numeric ST, or anything mlst writes when it could not assign one
/// (`-`, empty, `new`, `novel`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceType {
    Resolved(String),
    Unresolved(String),
}

impl SequenceType {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_digits(trimmed) {
            return SequenceType::Resolved(trimmed.to_string());
        }
        SequenceType::Unresolved(trimmed.to_string())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SequenceType::Resolved(_))
    }

    /// Sort key giving numeric order for resolved STs; unresolved values sort last.
    pub fn sort_key(&self) -> (bool, usize, &str) {
        match self {
            SequenceType::Resolved(st) => {
                let (len, digits) = numeric_key(st);
                (false, len, digits)
            }
            SequenceType::Unresolved(raw) => (true, 0, raw),
        }
    }
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceType::Resolved(st) => write!(f, "{}", st),
            SequenceType::Unresolved(raw) => write!(f, "{}", raw),
        }
    }
}
