//! Identifier pattern catalog
//!
//! Regular expressions for structured personal identifiers that show up in
//! claims statements and medical bills. The table is fixed at compile time
//! and compiled once into an [`IdentifierMatcher`].

use phiguard_core::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;

/// Kind of personal identifier a pattern detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentifierKind {
    Ssn,
    MemberId,
    MedicalRecord,
    DateOfBirth,
    StreetAddress,
    PostalCode,
    DiagnosisCode,
    PatientAmount,
    Phone,
}

impl IdentifierKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssn => "ssn",
            Self::MemberId => "member_id",
            Self::MedicalRecord => "medical_record",
            Self::DateOfBirth => "date_of_birth",
            Self::StreetAddress => "street_address",
            Self::PostalCode => "postal_code",
            Self::DiagnosisCode => "diagnosis_code",
            Self::PatientAmount => "patient_amount",
            Self::Phone => "phone",
        }
    }
}

/// Built-in identifier patterns.
///
/// Every pattern requires at least one digit, so the redaction placeholder
/// never matches and redacted output is stable under re-redaction.
///
/// `PostalCode` matches any bare 5-digit run, including the digits of a
/// labelled member ID or a dollar amount. Those values count once under their
/// own pattern and again as a postal code, which can push a document over the
/// medium identifier threshold.
pub const IDENTIFIER_PATTERNS: &[(IdentifierKind, &str)] = &[
    (IdentifierKind::Ssn, r"\b\d{3}-\d{2}-\d{4}\b"),
    (
        IdentifierKind::MemberId,
        r"(?i)\b(?:member|policy|subscriber|group|patient)\s*(?:id|#|number|no\.?)\s*[:#]?\s*[a-z]{0,3}\d[a-z0-9-]{3,}\b",
    ),
    (
        IdentifierKind::MedicalRecord,
        r"(?i)\b(?:mrn|medical\s+record(?:\s+(?:number|no\.?|#))?)\s*[:#]?\s*[a-z]{0,3}\d[a-z0-9-]{3,}\b",
    ),
    (
        IdentifierKind::DateOfBirth,
        r"(?i)\b(?:dob|date\s+of\s+birth|birth\s*date)\s*[:#]?\s*\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
    ),
    (
        IdentifierKind::StreetAddress,
        r"\b\d{1,5}\s+(?:[A-Z][A-Za-z]*\.?\s+){1,3}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Court|Ct|Way|Place|Pl)\b",
    ),
    (IdentifierKind::PostalCode, r"\b\d{5}(?:-\d{4})?\b"),
    (
        IdentifierKind::DiagnosisCode,
        r"(?i)\b(?:icd-?10(?:-cm)?|icd-?9|diagnosis\s+code|dx\s+code|cpt(?:\s+code)?|procedure\s+code)\s*[:#]?\s*[a-z]?\d{2,5}(?:\.\d{1,4})?\b",
    ),
    (
        IdentifierKind::PatientAmount,
        r"(?i)\b(?:amount\s+you\s+owe|you\s+(?:may\s+)?owe|amount\s+owed|patient\s+responsibility|your\s+responsibility|balance\s+due|amount\s+due)\s*[:-]?\s*\$\s?\d[\d,]*(?:\.\d{2})?\b",
    ),
    (
        IdentifierKind::Phone,
        r"(?:\(\d{3}\)\s?|\b\d{3}[-.\s])\d{3}[-.]\d{4}\b",
    ),
];

/// Compiled identifier catalog
#[derive(Debug, Clone)]
pub struct IdentifierMatcher {
    patterns: Vec<(IdentifierKind, Regex)>,
}

impl IdentifierMatcher {
    /// Compile the built-in catalog
    pub fn new() -> Result<Self> {
        let patterns = IDENTIFIER_PATTERNS
            .iter()
            .map(|(kind, pattern)| {
                Regex::new(pattern)
                    .map(|re| (*kind, re))
                    .map_err(|e| {
                        Error::classifier(format!(
                            "Failed to compile {} pattern: {}",
                            kind.label(),
                            e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Total matches across all patterns.
    ///
    /// A pattern matching twice counts twice, and matches from different
    /// patterns over the same text each count.
    pub fn count(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|(_, re)| re.find_iter(text).count())
            .sum()
    }

    /// Distinct kinds that match at least once, in catalog order
    pub fn kinds(&self, text: &str) -> Vec<IdentifierKind> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(kind, _)| *kind)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Byte spans of every match over the original text, sorted, with
    /// overlapping spans merged
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = self
            .patterns
            .iter()
            .flat_map(|(_, re)| re.find_iter(text).map(|m| (m.start(), m.end())))
            .collect();
        spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start < last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    /// Number of patterns in the catalog
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
