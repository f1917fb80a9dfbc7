//! Error types for the configuration checks.
//!
//! Field validators never fail: they return a `ValidationResult`. The
//! existence checks on the installation are different. A missing folder or
//! binary means "not configured yet" and is reported through `Err`, so the
//! caller has to handle it explicitly or convert it into a result.

use thiserror::Error;

use crate::messages::MessageKey;
use crate::types::ValidationResult;

/// Warning raised by the installation existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .0.default_text())]
pub struct CheckWarning(pub MessageKey);

impl CheckWarning {
    pub fn new(key: MessageKey) -> Self {
        Self(key)
    }

    pub fn key(&self) -> MessageKey {
        self.0
    }
}

impl From<CheckWarning> for ValidationResult {
    fn from(warning: CheckWarning) -> Self {
        ValidationResult::Warning(warning.0)
    }
}

/// Result type for the raising existence checks.
pub type CheckResult<T> = std::result::Result<T, CheckWarning>;

/// Errors loading message catalog overrides.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid message catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}
