//! Privacy gate between classification and LLM analysis
//!
//! [`SanitizedDocument`] can only be built from an accepted verdict, so any
//! code path that hands text to the analysis model has already been
//! screened and redacted.

use crate::phi::PhiClassifier;
use phiguard_core::{ClassificationVerdict, ContentSample, Error, Result, RiskLevel};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Redacted text from an accepted verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedDocument {
    text: String,
    risk_level: RiskLevel,
}

impl SanitizedDocument {
    /// Extract the sanitized text from an accepted verdict
    pub fn from_verdict(verdict: &ClassificationVerdict) -> Result<Self> {
        match (&verdict.sanitized_content, verdict.is_acceptable) {
            (Some(text), true) => Ok(Self {
                text: text.clone(),
                risk_level: verdict.risk_level,
            }),
            _ => Err(Error::rejected(verdict.risk_level)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Risk level the document was accepted at
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl TryFrom<&ClassificationVerdict> for SanitizedDocument {
    type Error = Error;

    fn try_from(verdict: &ClassificationVerdict) -> Result<Self> {
        Self::from_verdict(verdict)
    }
}

/// Result of screening one sample
#[derive(Debug, Clone)]
pub struct Screening {
    pub verdict: ClassificationVerdict,
    pub document: Option<SanitizedDocument>,
}

impl Screening {
    /// The forwardable document, or a rejection error
    pub fn into_document(self) -> Result<SanitizedDocument> {
        self.document
            .ok_or_else(|| Error::rejected(self.verdict.risk_level))
    }
}

/// Runs the classifier and records logs and metrics for each verdict
#[derive(Debug, Clone)]
pub struct Screener {
    classifier: Arc<PhiClassifier>,
}

impl Screener {
    pub fn new(classifier: Arc<PhiClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &PhiClassifier {
        &self.classifier
    }

    /// Classify a sample and pair the verdict with its forwardable document
    pub fn screen(&self, sample: &ContentSample) -> Screening {
        let start = Instant::now();
        let verdict = self.classifier.classify(sample);
        let latency_us = micros_saturating(start.elapsed());

        metrics::counter!(
            "phiguard_verdicts_total",
            "risk" => verdict.risk_level.as_str(),
            "accepted" => if verdict.is_acceptable { "true" } else { "false" }
        )
        .increment(1);
        metrics::histogram!("phiguard_classify_latency_us").record(latency_us as f64);

        if verdict.is_acceptable {
            info!(
                risk = %verdict.risk_level,
                filename = sample.filename.as_deref().unwrap_or("-"),
                latency_us,
                "document accepted for analysis"
            );
        } else {
            warn!(
                risk = %verdict.risk_level,
                filename = sample.filename.as_deref().unwrap_or("-"),
                issues = verdict.issues.len(),
                latency_us,
                "document rejected"
            );
        }

        let document = SanitizedDocument::from_verdict(&verdict).ok();
        Screening { verdict, document }
    }
}

/// Whole microseconds in `elapsed`, clamped to `u64::MAX`
fn micros_saturating(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(Arc::new(PhiClassifier::shared().clone()))
    }
}
