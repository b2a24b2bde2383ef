//! Content risk classifier
//!
//! Decides whether extracted document text is safe to forward to the
//! analysis model, and redacts personal identifiers from text that is.
//!
//! The tier starts at [`RiskLevel::Low`] and each check can only raise it:
//!
//! 1. distinct sensitive (claims/billing) keywords
//! 2. total identifier pattern matches
//! 3. filename markers such as `eob` or `claim`, which force high risk
//!
//! Low risk is accepted. Medium risk is accepted only when enough safe
//! (plan-document) keywords are present. High risk is always rejected.

use crate::config::GuardConfig;
use crate::keywords::KeywordSet;
use crate::redact::Redactor;
use phiguard_core::{
    ClassificationSignals, ClassificationVerdict, ContentSample, Result, RiskLevel,
};
use std::sync::OnceLock;
use tracing::{debug, info};

pub const ISSUE_CLAIMS_STATEMENT: &str =
    "Document looks like a personal claims or benefits statement (such as an Explanation of Benefits)";
pub const ISSUE_MEDICAL_INFO: &str = "Document may contain personal medical information";
pub const ISSUE_MANY_IDENTIFIERS: &str =
    "Document contains multiple personal identifiers such as ID numbers, dates of birth, or addresses";
pub const ISSUE_SOME_IDENTIFIERS: &str = "Document may contain personal information";
pub const ISSUE_RISKY_FILENAME: &str = "Filename suggests a personal medical document";

pub const SUGGEST_PLAN_SUMMARY: &str =
    "Upload a plan summary or benefits overview instead of a personal claims statement";
pub const SUGGEST_DOCUMENT_TITLES: &str =
    "Look for documents titled \"Summary of Benefits\", \"Plan Details\", or \"Coverage Summary\"";
pub const SUGGEST_LEGITIMATE_PLAN: &str = "Document appears to be a legitimate plan document";

/// Guidance appended to every rejected verdict
pub const REJECTION_GUIDANCE: &[&str] = &[
    "For your privacy, only general plan documents are analyzed; personal medical or billing records are never sent for analysis",
    "Safe to upload: Summary of Benefits and Coverage, plan brochures, drug formularies, provider network directories",
    "Do not upload: Explanation of Benefits statements, medical bills, claim forms, lab results, or anything showing your name or member ID",
];

static SHARED: OnceLock<PhiClassifier> = OnceLock::new();

/// Rule-based PHI classifier over fixed keyword and identifier catalogs
#[derive(Debug, Clone)]
pub struct PhiClassifier {
    config: GuardConfig,
    sensitive: KeywordSet,
    safe: KeywordSet,
    redactor: Redactor,
}

impl PhiClassifier {
    /// Create a classifier with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(GuardConfig::default())
    }

    /// Create a classifier with a custom configuration
    pub fn with_config(config: GuardConfig) -> Result<Self> {
        config.validate()?;

        let classifier = Self {
            sensitive: KeywordSet::sensitive()?,
            safe: KeywordSet::safe()?,
            redactor: Redactor::with_placeholder(config.placeholder.clone())?,
            config,
        };

        info!(
            "Initialized PHI classifier: {} sensitive keywords, {} safe keywords, {} identifier patterns",
            classifier.sensitive.len(),
            classifier.safe.len(),
            classifier.redactor.matcher().len()
        );

        Ok(classifier)
    }

    /// Process-wide classifier built from the default configuration
    pub fn shared() -> &'static PhiClassifier {
        SHARED.get_or_init(|| Self::new().expect("built-in PHI catalogs must compile"))
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Classify a content sample
    pub fn classify(&self, sample: &ContentSample) -> ClassificationVerdict {
        self.classify_text(&sample.text, sample.filename.as_deref())
    }

    /// Classify raw text with an optional originating filename
    pub fn classify_text(&self, text: &str, filename: Option<&str>) -> ClassificationVerdict {
        let thresholds = &self.config.thresholds;
        let mut risk = RiskLevel::Low;
        let mut issues: Vec<String> = Vec::new();
        let mut suggestions: Vec<String> = Vec::new();

        let sensitive = self.sensitive.distinct_matches(text);
        if sensitive.len() > thresholds.sensitive_high_above {
            risk = risk.escalate(RiskLevel::High);
            issues.push(ISSUE_CLAIMS_STATEMENT.to_string());
            suggestions.push(SUGGEST_PLAN_SUMMARY.to_string());
            suggestions.push(SUGGEST_DOCUMENT_TITLES.to_string());
        } else if sensitive.len() > thresholds.sensitive_medium_above {
            risk = risk.escalate(RiskLevel::Medium);
            issues.push(ISSUE_MEDICAL_INFO.to_string());
        }

        let matcher = self.redactor.matcher();
        let identifier_count = matcher.count(text);
        if identifier_count > thresholds.identifiers_high_above {
            risk = risk.escalate(RiskLevel::High);
            issues.push(ISSUE_MANY_IDENTIFIERS.to_string());
        } else if identifier_count > thresholds.identifiers_medium_above {
            risk = risk.escalate(RiskLevel::Medium);
            issues.push(ISSUE_SOME_IDENTIFIERS.to_string());
        }

        let filename_flagged = filename.is_some_and(|name| self.is_risky_filename(name));
        if filename_flagged {
            risk = risk.escalate(RiskLevel::High);
            issues.push(ISSUE_RISKY_FILENAME.to_string());
        }

        let safe = self.safe.distinct_matches(text);
        if risk == RiskLevel::Low {
            suggestions.push(SUGGEST_LEGITIMATE_PLAN.to_string());
        }

        let is_acceptable = match risk {
            RiskLevel::Low => true,
            RiskLevel::Medium => safe.len() > thresholds.safe_rescue_above,
            RiskLevel::High => false,
        };

        let sanitized_content = if is_acceptable {
            Some(self.redactor.redact(text))
        } else {
            suggestions.extend(REJECTION_GUIDANCE.iter().map(|s| s.to_string()));
            None
        };

        debug!(
            risk = %risk,
            accepted = is_acceptable,
            sensitive_keywords = sensitive.len(),
            safe_keywords = safe.len(),
            identifiers = identifier_count,
            filename_flagged,
            "classified content sample"
        );

        ClassificationVerdict {
            risk_level: risk,
            is_acceptable,
            issues,
            suggestions,
            sanitized_content,
            signals: ClassificationSignals {
                sensitive_keywords: sensitive.iter().map(|k| k.to_string()).collect(),
                safe_keywords: safe.iter().map(|k| k.to_string()).collect(),
                identifier_count,
                identifier_kinds: matcher
                    .kinds(text)
                    .iter()
                    .map(|k| k.label().to_string())
                    .collect(),
                filename_flagged,
            },
        }
    }

    /// Whether the lowercased filename contains any claims/billing marker
    pub fn is_risky_filename(&self, filename: &str) -> bool {
        let lowered = filename.to_lowercase();
        self.config
            .risky_filename_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }
}

/// Classify text with the shared default classifier
pub fn classify(text: &str, filename: Option<&str>) -> ClassificationVerdict {
    PhiClassifier::shared().classify_text(text, filename)
}
