//! phiguard Classifiers
//!
//! Rule-based content risk classification for insurance documents.
//!
//! Before a document is sent to a third-party language model it is checked
//! for signs of personal health information:
//! - Keyword catalogs separate personal claims statements from generic plan documents
//! - Identifier patterns count and redact SSNs, member IDs, dates of birth, addresses, and similar
//! - A filename heuristic catches EOBs, bills, and statements by name
//!
//! Classification is pure and synchronous. Rejection is a normal verdict,
//! never an error.

pub mod config;
pub mod guard;
pub mod keywords;
pub mod patterns;
pub mod phi;
pub mod prompt;
pub mod redact;

pub use config::{GuardConfig, Thresholds};
pub use guard::{SanitizedDocument, Screener, Screening};
pub use keywords::KeywordSet;
pub use patterns::{IdentifierKind, IdentifierMatcher};
pub use phi::{classify, PhiClassifier};
pub use prompt::AnalysisPrompt;
pub use redact::{Redactor, DEFAULT_PLACEHOLDER};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::GuardConfig;
    pub use crate::guard::{SanitizedDocument, Screener};
    pub use crate::phi::{classify, PhiClassifier};
    pub use crate::prompt::AnalysisPrompt;
    pub use phiguard_core::{ClassificationVerdict, ContentSample, RiskLevel};
}
