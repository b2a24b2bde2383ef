//! phiguard Core
//!
//! Core types shared across phiguard components.
//!
//! This crate provides:
//! - The content sample handed over by document extraction
//! - Ordered risk levels and the classification verdict returned to callers
//! - Chat message types used when assembling the downstream analysis prompt
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ChatMessage, ClassificationSignals, ClassificationVerdict, ContentSample, RiskLevel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        ChatMessage, ClassificationSignals, ClassificationVerdict, ContentSample, RiskLevel,
    };
}
