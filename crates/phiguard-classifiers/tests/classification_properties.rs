//! Behavioural tests for the content risk classifier
//!
//! Covers the acceptance matrix, the filename override, the privacy
//! invariant between acceptance and sanitized output, and redaction
//! stability.

use phiguard_classifiers::keywords::{SAFE_KEYWORDS, SENSITIVE_KEYWORDS};
use phiguard_classifiers::prelude::*;
use phiguard_classifiers::{Redactor, DEFAULT_PLACEHOLDER};
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Words that form no keyword and no identifier, alone or in sequence
const NEUTRAL_WORDS: &[&str] = &[
    "coverage", "includes", "hospital", "preventive", "care", "emergency", "pharmacy",
    "visits", "specialist", "therapy", "vision", "dental", "benefits", "plan", "and", "the",
    "for", "with",
];

const IDENTIFIER_FRAGMENTS: &[&str] = &[
    "123-45-6789",
    "Member ID: XJH123456789",
    "DOB: 04/12/1978",
    "MRN 00482913",
    "742 Evergreen Terrace Dr",
    "Springfield, IL 62704",
    "(555) 123-4567",
    "Diagnosis code: E11.9",
    "Patient responsibility: $245.10",
];

fn join(parts: &[&str]) -> String {
    parts.join(". ")
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        prop::sample::select(NEUTRAL_WORDS),
        prop::sample::select(SAFE_KEYWORDS),
        prop::sample::select(SENSITIVE_KEYWORDS),
        prop::sample::select(IDENTIFIER_FRAGMENTS),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.join(" "))
}

#[test]
fn test_plan_summary_example() {
    let text = "Summary of Benefits: formulary, provider network, plan year details.";
    let verdict = classify(text, None);

    assert_eq!(verdict.risk_level, RiskLevel::Low);
    assert!(verdict.is_acceptable);
    assert!(verdict.issues.is_empty());
    assert_eq!(verdict.sanitized_content.as_deref(), Some(text));
}

#[test]
fn test_claims_statement_example() {
    let text = "Claim number 1. Patient name. Amount paid. Service date. \
                Claim number 2. Patient name. Amount paid. Service date.";
    let verdict = classify(text, None);

    assert_eq!(verdict.risk_level, RiskLevel::High);
    assert!(!verdict.is_acceptable);
    assert!(verdict.sanitized_content.is_none());
    assert_eq!(verdict.signals.sensitive_keywords.len(), 4);
}

#[test]
fn test_repeated_ssn_example() {
    let text = ["123-45-6789"; 6].join(" ");
    let verdict = classify(&text, None);

    assert_eq!(verdict.signals.identifier_count, 6);
    assert_eq!(verdict.risk_level, RiskLevel::High);
    assert!(!verdict.is_acceptable);
    assert!(verdict.sanitized_content.is_none());
}

#[test]
fn test_eob_filename_example() {
    let text = "Summary of Benefits: formulary, provider network, plan year details.";
    let verdict = classify(text, Some("EOB_January.pdf"));

    assert_eq!(verdict.risk_level, RiskLevel::High);
    assert!(!verdict.is_acceptable);
    assert!(verdict.sanitized_content.is_none());
    assert!(verdict.signals.filename_flagged);
}

#[test]
fn test_acceptance_matrix() {
    // low, accepted
    let low = classify("The plan covers preventive care.", None);
    assert_eq!((low.risk_level, low.is_acceptable), (RiskLevel::Low, true));
    assert!(low.sanitized_content.is_some());

    // medium, rescued by safe keywords
    let rescued = classify(
        &join(&["claim number", "patient name", "deductible", "coinsurance", "formulary"]),
        None,
    );
    assert_eq!((rescued.risk_level, rescued.is_acceptable), (RiskLevel::Medium, true));
    assert!(rescued.sanitized_content.is_some());

    // medium, not enough safe keywords
    let medium = classify(
        &join(&["claim number", "patient name", "deductible", "coinsurance"]),
        None,
    );
    assert_eq!((medium.risk_level, medium.is_acceptable), (RiskLevel::Medium, false));
    assert!(medium.sanitized_content.is_none());

    // high
    let high = classify("Plan overview", Some("claim_2024.pdf"));
    assert_eq!((high.risk_level, high.is_acceptable), (RiskLevel::High, false));
    assert!(high.sanitized_content.is_none());
}

#[test]
fn test_medium_identifiers_rescued_and_redacted() {
    let text = "Summary of Benefits. Deductible and coinsurance apply. \
                Call (555) 123-4567, (555) 123-4568 or (555) 123-4569.";
    let verdict = classify(text, None);

    assert_eq!(verdict.risk_level, RiskLevel::Medium);
    assert!(verdict.is_acceptable);
    let sanitized = verdict.sanitized_content.unwrap();
    assert!(!sanitized.contains("555"));
    assert_eq!(sanitized.matches(DEFAULT_PLACEHOLDER).count(), 3);
}

#[test]
fn test_verdict_json_shape() {
    let verdict = classify("Summary of Benefits", None);
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["riskLevel"], "low");
    assert_eq!(json["isAcceptable"], true);
    assert_eq!(json["sanitizedContent"], "Summary of Benefits");
    assert!(json["issues"].as_array().unwrap().is_empty());
}

proptest! {
    #[test]
    fn prop_clean_text_is_low_and_acceptable(
        words in prop::collection::vec(prop::sample::select(NEUTRAL_WORDS), 0..40)
    ) {
        let text = words.join(" ");
        let verdict = classify(&text, Some("plan_overview.pdf"));

        prop_assert_eq!(verdict.risk_level, RiskLevel::Low);
        prop_assert!(verdict.is_acceptable);
        prop_assert!(verdict.issues.is_empty());
        prop_assert_eq!(verdict.sanitized_content.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn prop_four_sensitive_keywords_always_rejected(
        sensitive in subsequence(SENSITIVE_KEYWORDS, 4..=SENSITIVE_KEYWORDS.len()),
        safe in subsequence(SAFE_KEYWORDS, 0..=SAFE_KEYWORDS.len()),
    ) {
        let parts: Vec<&str> = safe.iter().chain(sensitive.iter()).copied().collect();
        let verdict = classify(&join(&parts), None);

        prop_assert_eq!(verdict.risk_level, RiskLevel::High);
        prop_assert!(!verdict.is_acceptable);
        prop_assert!(verdict.sanitized_content.is_none());
    }

    #[test]
    fn prop_two_sensitive_rescued_by_three_safe(
        sensitive in subsequence(SENSITIVE_KEYWORDS, 2),
        safe in subsequence(SAFE_KEYWORDS, 3..=SAFE_KEYWORDS.len()),
    ) {
        let parts: Vec<&str> = sensitive.iter().chain(safe.iter()).copied().collect();
        let verdict = classify(&join(&parts), None);

        prop_assert_eq!(verdict.risk_level, RiskLevel::Medium);
        prop_assert!(verdict.is_acceptable);
        prop_assert!(verdict.sanitized_content.is_some());
    }

    #[test]
    fn prop_two_sensitive_without_support_rejected(
        sensitive in subsequence(SENSITIVE_KEYWORDS, 2),
        safe in subsequence(SAFE_KEYWORDS, 0..=2),
    ) {
        let parts: Vec<&str> = sensitive.iter().chain(safe.iter()).copied().collect();
        let verdict = classify(&join(&parts), None);

        prop_assert_eq!(verdict.risk_level, RiskLevel::Medium);
        prop_assert!(!verdict.is_acceptable);
        prop_assert!(verdict.sanitized_content.is_none());
    }

    #[test]
    fn prop_eob_filename_forces_high(
        prefix in "[a-z0-9_ ]{0,12}",
        marker in "[eE][oO][bB]",
        suffix in "[a-z0-9_]{0,12}\\.(pdf|docx|txt)",
    ) {
        let filename = format!("{}{}{}", prefix, marker, suffix);
        let verdict = classify("The plan covers preventive care.", Some(&filename));

        prop_assert_eq!(verdict.risk_level, RiskLevel::High);
        prop_assert!(!verdict.is_acceptable);
    }

    #[test]
    fn prop_sanitized_iff_acceptable(text in document(), with_bill in any::<bool>()) {
        let filename = if with_bill { "hospital_bill.pdf" } else { "plan.pdf" };
        let verdict = classify(&text, Some(filename));

        prop_assert_eq!(verdict.is_acceptable, verdict.sanitized_content.is_some());
        prop_assert_eq!(verdict.risk_level == RiskLevel::Low, verdict.issues.is_empty());
        if verdict.risk_level == RiskLevel::High {
            prop_assert!(!verdict.is_acceptable);
        }
    }

    #[test]
    fn prop_redaction_is_idempotent(text in document()) {
        let redactor = Redactor::new().unwrap();
        let once = redactor.redact(&text);

        prop_assert_eq!(redactor.redact(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_digit()));
    }
}
