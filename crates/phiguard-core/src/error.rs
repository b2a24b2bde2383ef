//! Error types for phiguard

use crate::types::RiskLevel;

/// Result type alias using phiguard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for phiguard operations
///
/// Classification itself never fails; a rejected document is a normal
/// verdict. These variants cover construction, configuration, and the
/// hand-off to downstream analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classifier construction errors (pattern compilation and the like)
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A rejected document was about to be forwarded for analysis
    #[error("document rejected at {risk} risk and must not be forwarded")]
    Rejected {
        /// Risk level of the rejected verdict
        risk: RiskLevel,
    },

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a rejection error for the given risk level
    pub fn rejected(risk: RiskLevel) -> Self {
        Self::Rejected { risk }
    }
}
