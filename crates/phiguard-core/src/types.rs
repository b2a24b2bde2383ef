//! Core types for phiguard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text handed over by document extraction, plus the file it came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSample {
    /// Extracted plain text
    pub text: String,

    /// Originating filename, if the text came from an upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ContentSample {
    /// Create a sample without a filename
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: None,
        }
    }

    /// Attach the originating filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Ordered risk tier: `Low < Medium < High`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Raise to `proposed` if it is higher; never lowers the tier
    #[must_use]
    pub fn escalate(self, proposed: RiskLevel) -> RiskLevel {
        self.max(proposed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw signals gathered while classifying, for diagnostics and display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSignals {
    /// Distinct sensitive-document keywords found
    pub sensitive_keywords: Vec<String>,

    /// Distinct safe-document keywords found
    pub safe_keywords: Vec<String>,

    /// Total identifier matches, summed across all patterns
    pub identifier_count: usize,

    /// Distinct identifier kinds that matched
    pub identifier_kinds: Vec<String>,

    /// Whether the filename carried a claims/billing marker
    pub filename_flagged: bool,
}

/// Outcome of classifying a content sample
///
/// `sanitized_content` is present exactly when `is_acceptable` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationVerdict {
    /// Final risk tier
    pub risk_level: RiskLevel,

    /// Whether the content may be forwarded for analysis
    pub is_acceptable: bool,

    /// Human-readable problems found, in detection order
    pub issues: Vec<String>,

    /// Human-readable guidance for the user, in emission order
    pub suggestions: Vec<String>,

    /// Redacted copy of the text, only for accepted content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitized_content: Option<String>,

    /// Counts and matches behind the decision
    #[serde(default)]
    pub signals: ClassificationSignals,
}

impl ClassificationVerdict {
    /// Whether the verdict rejects the content
    pub fn is_rejected(&self) -> bool {
        !self.is_acceptable
    }
}

/// A chat message sent to the downstream analysis model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}
