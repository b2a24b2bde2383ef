//! Identifier redaction

use crate::patterns::IdentifierMatcher;
use phiguard_core::{Error, Result};

/// Placeholder written over every redacted identifier
pub const DEFAULT_PLACEHOLDER: &str = "[REDACTED]";

/// Replaces identifier matches with a fixed placeholder.
///
/// All patterns are evaluated against the untouched input and their spans
/// merged before any replacement, so a placeholder can never feed a later
/// pattern.
#[derive(Debug, Clone)]
pub struct Redactor {
    matcher: IdentifierMatcher,
    placeholder: String,
}

impl Redactor {
    /// Create a redactor using [`DEFAULT_PLACEHOLDER`]
    pub fn new() -> Result<Self> {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Create a redactor with a custom placeholder.
    ///
    /// The placeholder must be non-empty and free of ASCII digits. Every
    /// identifier pattern needs a digit, so a digit-free placeholder can
    /// never combine with neighbouring text into a new match.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Result<Self> {
        let placeholder = placeholder.into();
        let matcher = IdentifierMatcher::new()?;

        if placeholder.is_empty() {
            return Err(Error::config("redaction placeholder must not be empty"));
        }
        if placeholder.chars().any(|c| c.is_ascii_digit()) {
            return Err(Error::config(format!(
                "redaction placeholder {:?} must not contain digits",
                placeholder
            )));
        }
        if matcher.count(&placeholder) > 0 {
            return Err(Error::config(format!(
                "redaction placeholder {:?} matches an identifier pattern",
                placeholder
            )));
        }

        Ok(Self {
            matcher,
            placeholder,
        })
    }

    /// Redacted copy of `text`
    pub fn redact(&self, text: &str) -> String {
        let spans = self.matcher.spans(text);
        if spans.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, end) in spans {
            out.push_str(&text[cursor..start]);
            out.push_str(&self.placeholder);
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    pub fn matcher(&self) -> &IdentifierMatcher {
        &self.matcher
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
