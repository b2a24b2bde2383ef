//! Document keyword catalogs
//!
//! Two fixed phrase lists: wording typical of personal claims and billing
//! documents, and wording typical of generic plan documents. Both are
//! matched with Aho-Corasick, ASCII case-insensitively.

use aho_corasick::AhoCorasick;
use phiguard_core::{Error, Result};
use std::collections::BTreeSet;

/// Phrases that, in bulk, mark a personal claims or billing statement
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "explanation of benefits",
    "this is not a bill",
    "claim number",
    "claim status",
    "patient name",
    "patient account",
    "amount paid",
    "amount billed",
    "amount charged",
    "plan paid",
    "diagnosis code",
    "procedure code",
    "service date",
    "date of service",
    "patient responsibility",
    "you owe",
    "member id",
    "provider billed",
    "rendering provider",
    "date of birth",
];

/// Phrases that mark a generic, non-personal plan document
pub const SAFE_KEYWORDS: &[&str] = &[
    "summary of benefits",
    "coverage summary",
    "plan details",
    "formulary",
    "provider network",
    "plan year",
    "deductible",
    "out-of-pocket maximum",
    "out-of-pocket limit",
    "copayment",
    "coinsurance",
    "covered services",
    "excluded services",
    "evidence of coverage",
    "schedule of benefits",
    "in-network",
    "out-of-network",
    "prior authorization",
];

/// A compiled keyword catalog
#[derive(Debug, Clone)]
pub struct KeywordSet {
    name: String,
    matcher: AhoCorasick,
    keywords: Vec<&'static str>,
}

impl KeywordSet {
    /// Build a case-insensitive matcher over the given keywords
    pub fn new(name: impl Into<String>, keywords: &[&'static str]) -> Result<Self> {
        let name = name.into();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| {
                Error::classifier(format!("Failed to build {} keyword matcher: {}", name, e))
            })?;

        Ok(Self {
            name,
            matcher,
            keywords: keywords.to_vec(),
        })
    }

    /// Catalog of claims/billing wording
    pub fn sensitive() -> Result<Self> {
        Self::new("sensitive", SENSITIVE_KEYWORDS)
    }

    /// Catalog of plan-document wording
    pub fn safe() -> Result<Self> {
        Self::new("safe", SAFE_KEYWORDS)
    }

    /// Distinct keywords present in `text`, in catalog order.
    ///
    /// Overlapping search is used so that keywords sharing text are all
    /// reported; repeats of the same keyword are reported once.
    pub fn distinct_matches(&self, text: &str) -> Vec<&'static str> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|idx| self.keywords[idx])
            .collect()
    }

    /// Number of distinct keywords present in `text`
    pub fn distinct_count(&self, text: &str) -> usize {
        self.distinct_matches(text).len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_distinct_matches() {
        let set = KeywordSet::sensitive().unwrap();
        let matches =
            set.distinct_matches("CLAIM NUMBER 1, claim number 2, Patient Name: redacted");
        assert_eq!(matches, vec!["claim number", "patient name"]);
    }

    #[test]
    fn test_safe_catalog() {
        let set = KeywordSet::safe().unwrap();
        let text = "Summary of Benefits: formulary, provider network, plan year details.";
        assert_eq!(
            set.distinct_matches(text),
            vec!["summary of benefits", "formulary", "provider network", "plan year"]
        );
        assert_eq!(set.name(), "safe");
    }

    #[test]
    fn test_overlapping_keywords_are_all_seen() {
        let set = KeywordSet::new("test", &["amount", "amount paid", "paid"]).unwrap();
        assert_eq!(set.distinct_count("the amount paid was"), 3);
    }

    #[test]
    fn test_empty_text() {
        let set = KeywordSet::sensitive().unwrap();
        assert_eq!(set.distinct_count(""), 0);
        assert!(!set.is_empty());
    }
}
