//! Error types for CPE name handling

use crate::attribute::Version;
use thiserror::Error;

/// Result type alias using the CPE Error
pub type Result<T> = std::result::Result<T, Error>;

/// CPE name error types
///
/// Every failure is raised synchronously at the point of detection; a
/// failed parse never leaves a partially built name behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong separator or segment counts, unmatched anchored grammar,
    /// embedded whitespace, or more positional parts than the syntax allows.
    #[error("Bad-formed CPE name: {0}")]
    Structural(String),

    /// A field's raw value failed its attribute's registered check.
    #[error("Invalid value of attribute '{attribute}': {value}")]
    Validation { attribute: String, value: String },

    /// An attribute name outside the closed key set, or a query outside
    /// the name's version key set.
    #[error("Invalid attribute name: {0}")]
    InvalidAttribute(String),

    /// WFN serialization requested for a version that has no WFN form.
    #[error("WFN projection not supported for CPE version {0}")]
    UnsupportedProjection(Version),
}

impl Error {
    /// Build a structural error
    pub fn structural(msg: impl Into<String>) -> Self {
        Error::Structural(msg.into())
    }

    /// Build a validation error carrying the offending attribute and value
    pub fn validation(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Error::Validation {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Get an error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Error::Structural(_) => "STRUCTURAL",
            Error::Validation { .. } => "VALIDATION",
            Error::InvalidAttribute(_) => "INVALID_ATTRIBUTE",
            Error::UnsupportedProjection(_) => "UNSUPPORTED_PROJECTION",
        }
    }
}
