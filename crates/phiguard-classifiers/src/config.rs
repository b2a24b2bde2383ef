//! Configuration for the content risk classifier
//!
//! Every field has a default, and the defaults are the production
//! thresholds. An empty YAML document therefore yields the stock
//! classifier.

use crate::redact::DEFAULT_PLACEHOLDER;
use phiguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Escalation and acceptance thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Lowercase filename fragments that force a high risk verdict
    #[serde(default = "default_filename_markers")]
    pub risky_filename_markers: Vec<String>,

    /// Text written over redacted identifiers
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Maximum characters of document text embedded in the analysis prompt
    #[serde(default = "default_prompt_char_budget")]
    pub prompt_char_budget: usize,
}

/// Count thresholds. Each tier is reached when a count is strictly above
/// the given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Distinct sensitive keywords above which the tier is high
    #[serde(default = "default_sensitive_high")]
    pub sensitive_high_above: usize,

    /// Distinct sensitive keywords above which the tier is at least medium
    #[serde(default = "default_sensitive_medium")]
    pub sensitive_medium_above: usize,

    /// Identifier matches above which the tier is high
    #[serde(default = "default_identifiers_high")]
    pub identifiers_high_above: usize,

    /// Identifier matches above which the tier is at least medium
    #[serde(default = "default_identifiers_medium")]
    pub identifiers_medium_above: usize,

    /// Distinct safe keywords above which a medium verdict is accepted
    #[serde(default = "default_safe_rescue")]
    pub safe_rescue_above: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sensitive_high_above: default_sensitive_high(),
            sensitive_medium_above: default_sensitive_medium(),
            identifiers_high_above: default_identifiers_high(),
            identifiers_medium_above: default_identifiers_medium(),
            safe_rescue_above: default_safe_rescue(),
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            risky_filename_markers: default_filename_markers(),
            placeholder: default_placeholder(),
            prompt_char_budget: default_prompt_char_budget(),
        }
    }
}

impl GuardConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.sensitive_medium_above > t.sensitive_high_above {
            return Err(Error::config(format!(
                "sensitive_medium_above ({}) exceeds sensitive_high_above ({})",
                t.sensitive_medium_above, t.sensitive_high_above
            )));
        }
        if t.identifiers_medium_above > t.identifiers_high_above {
            return Err(Error::config(format!(
                "identifiers_medium_above ({}) exceeds identifiers_high_above ({})",
                t.identifiers_medium_above, t.identifiers_high_above
            )));
        }
        if let Some(marker) = self
            .risky_filename_markers
            .iter()
            .find(|m| m.is_empty() || m.to_lowercase() != **m)
        {
            return Err(Error::config(format!(
                "filename marker {:?} must be non-empty and lowercase",
                marker
            )));
        }
        if self.placeholder.is_empty() {
            return Err(Error::config("placeholder must not be empty"));
        }
        if self.placeholder.chars().any(|c| c.is_ascii_digit()) {
            return Err(Error::config(format!(
                "placeholder {:?} must not contain digits",
                self.placeholder
            )));
        }
        if self.prompt_char_budget == 0 {
            return Err(Error::config("prompt_char_budget must be greater than zero"));
        }
        Ok(())
    }
}

fn default_sensitive_high() -> usize {
    3
}

fn default_sensitive_medium() -> usize {
    1
}

fn default_identifiers_high() -> usize {
    5
}

fn default_identifiers_medium() -> usize {
    2
}

fn default_safe_rescue() -> usize {
    2
}

fn default_filename_markers() -> Vec<String> {
    ["eob", "claim", "bill", "statement"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_prompt_char_budget() -> usize {
    100_000
}
