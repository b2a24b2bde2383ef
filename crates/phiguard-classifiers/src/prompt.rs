//! Analysis prompt assembly
//!
//! Builds the chat messages sent to the coverage-explanation model. Only a
//! [`SanitizedDocument`] is accepted as input.

use crate::guard::SanitizedDocument;
use phiguard_core::ChatMessage;

/// Instruction given to the analysis model
pub const SYSTEM_INSTRUCTION: &str = "You explain health insurance documents in plain English for people \
without insurance expertise. Identifiers in the document have been replaced with [REDACTED]; never \
guess at them. Respond with a JSON object with these keys: \"summary\" (two or three sentences), \
\"covered\" (list of covered services), \"not_covered\" (list of exclusions), \"costs\" (deductibles, \
copays, coinsurance and out-of-pocket limits as stated), and \"caveats\" (anything ambiguous or worth \
confirming with the insurer). Do not give medical or legal advice.";

/// Marker appended when the document text was cut to fit the budget
pub const TRUNCATION_NOTE: &str = "[Document truncated]";

/// Prompt builder with a character budget for the embedded document
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPrompt {
    char_budget: usize,
}

impl AnalysisPrompt {
    pub fn new(char_budget: usize) -> Self {
        Self { char_budget }
    }

    /// System and user messages for one document
    pub fn build(&self, document: &SanitizedDocument) -> Vec<ChatMessage> {
        let (body, truncated) = truncate_chars(document.as_str(), self.char_budget);

        let mut user = String::with_capacity(body.len() + 64);
        user.push_str("Explain the coverage in this insurance document:\n\n");
        user.push_str(body);
        if truncated {
            user.push_str("\n\n");
            user.push_str(TRUNCATION_NOTE);
        }

        vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(user)]
    }
}

impl Default for AnalysisPrompt {
    fn default() -> Self {
        Self::new(crate::config::GuardConfig::default().prompt_char_budget)
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phi::PhiClassifier;

    fn document(text: &str) -> SanitizedDocument {
        let verdict = PhiClassifier::shared().classify_text(text, None);
        SanitizedDocument::from_verdict(&verdict).unwrap()
    }

    #[test]
    fn test_messages_carry_sanitized_text() {
        let messages = AnalysisPrompt::default().build(&document("Questions? Call 555-123-4567."));

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.ends_with("Questions? Call [REDACTED]."));
        assert!(!messages[1].content.contains("555"));
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let messages = AnalysisPrompt::new(3).build(&document("ééééé"));
        assert!(messages[1].content.contains("ééé\n\n[Document truncated]"));
        assert!(!messages[1].content.contains("éééé"));
    }

    #[test]
    fn test_short_document_not_truncated() {
        let messages = AnalysisPrompt::new(100).build(&document("deductible"));
        assert!(!messages[1].content.contains(TRUNCATION_NOTE));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 3), ("abc", false));
        assert_eq!(truncate_chars("abcd", 3), ("abc", true));
        assert_eq!(truncate_chars("", 0), ("", false));
    }
}
